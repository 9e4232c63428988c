//! Router builder for the dashboard's form-post routes

use crate::actions::AppState;
use crate::server::handlers;
use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the mutation routes:
/// - POST /login - Sign in via the identity provider
/// - POST /dashboard/invoices - Create an invoice
/// - POST /dashboard/invoices/{id} - Update an invoice
/// - POST /dashboard/invoices/{id}/delete - Delete an invoice
/// - POST /dashboard/customers - Create a customer
/// - POST /dashboard/customers/{id} - Update a customer
/// - POST /dashboard/customers/{id}/delete - Delete a customer
pub fn build_dashboard_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/dashboard/invoices", post(handlers::create_invoice))
        .route("/dashboard/invoices/{id}", post(handlers::update_invoice))
        .route(
            "/dashboard/invoices/{id}/delete",
            post(handlers::delete_invoice),
        )
        .route("/dashboard/customers", post(handlers::create_customer))
        .route("/dashboard/customers/{id}", post(handlers::update_customer))
        .route(
            "/dashboard/customers/{id}/delete",
            post(handlers::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
