//! Axum handlers mapping form posts to actions and outcomes to responses

use crate::actions::{self, AppState};
use crate::core::form::FormPayload;
use crate::core::outcome::{ActionOutcome, State as FormState};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use tracing::error;
use uuid::Uuid;

/// `Success` becomes a `303 See Other` to the listing path; failures are
/// re-rendered by the form from the JSON state body.
fn respond(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Success { next_path } => Redirect::to(next_path).into_response(),
        failure @ ActionOutcome::ValidationFailure { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(failure.into_state())).into_response()
        }
        failure @ ActionOutcome::ExecutionFailure { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure.into_state())).into_response()
        }
    }
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<FormPayload>,
) -> Response {
    respond(actions::create_invoice(&state, &form).await)
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<FormPayload>,
) -> Response {
    respond(actions::update_invoice(&state, &id, &form).await)
}

pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let outcome = actions::delete_invoice(&state, &id).await;
    let status = if outcome.is_deleted() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome.into_state())).into_response()
}

pub async fn create_customer(
    State(state): State<AppState>,
    Form(form): Form<FormPayload>,
) -> Response {
    respond(actions::create_customer(&state, &form).await)
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<FormPayload>,
) -> Response {
    respond(actions::update_customer(&state, &id, &form).await)
}

pub async fn delete_customer(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let outcome = actions::delete_customer(&state, &id).await;
    let status = if outcome.is_deleted() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome.into_state())).into_response()
}

pub async fn login(State(state): State<AppState>, Form(form): Form<FormPayload>) -> Response {
    match actions::authenticate(&state, &form).await {
        Ok(None) => Redirect::to("/dashboard").into_response(),
        Ok(Some(message)) => (
            StatusCode::UNAUTHORIZED,
            Json(FormState {
                errors: None,
                message: Some(message),
            }),
        )
            .into_response(),
        Err(fault) => {
            // Unclassified faults surface as server errors, not login messages
            error!(%fault, "authentication fault");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
