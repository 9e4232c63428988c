//! Create, update, and delete actions for customers

use crate::actions::{invalidate, AppState};
use crate::cache::CUSTOMERS_PATH;
use crate::core::form::FormPayload;
use crate::core::outcome::{ActionOutcome, DeleteOutcome};
use crate::entities::CustomerFields;
use tracing::{debug, warn};
use uuid::Uuid;

/// Validate the submission, insert one customer row, and redirect to the
/// customers listing.
pub async fn create_customer(state: &AppState, form: &FormPayload) -> ActionOutcome {
    let fields = match CustomerFields::parse(form, &state.validation) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionOutcome::ValidationFailure {
                errors,
                message: "Missing Fields. Failed to Create Customer.".to_string(),
            };
        }
    };

    match state.customers.insert(fields).await {
        Ok(customer) => debug!(customer_id = %customer.id, "created customer"),
        Err(error) => {
            warn!(%error, "customer insert failed");
            return ActionOutcome::ExecutionFailure {
                message: "Database Error: Failed to Create Customer.".to_string(),
            };
        }
    }

    invalidate(state, CUSTOMERS_PATH).await;
    ActionOutcome::Success {
        next_path: CUSTOMERS_PATH,
    }
}

/// Validate the submission and rewrite all mutable columns of the row
/// identified by `id` (supplied by the route, never the form payload).
pub async fn update_customer(state: &AppState, id: &Uuid, form: &FormPayload) -> ActionOutcome {
    let fields = match CustomerFields::parse(form, &state.validation) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionOutcome::ValidationFailure {
                errors,
                message: "Missing Fields. Failed to Update Customer.".to_string(),
            };
        }
    };

    match state.customers.update(id, fields).await {
        Ok(()) => debug!(customer_id = %id, "updated customer"),
        Err(error) => {
            warn!(%error, customer_id = %id, "customer update failed");
            return ActionOutcome::ExecutionFailure {
                message: "Database Error: Failed to Update Customer.".to_string(),
            };
        }
    }

    invalidate(state, CUSTOMERS_PATH).await;
    ActionOutcome::Success {
        next_path: CUSTOMERS_PATH,
    }
}

/// Delete the row identified by `id` and confirm with a message.
pub async fn delete_customer(state: &AppState, id: &Uuid) -> DeleteOutcome {
    match state.customers.delete(id).await {
        Ok(()) => {
            debug!(customer_id = %id, "deleted customer");
            invalidate(state, CUSTOMERS_PATH).await;
            DeleteOutcome::Deleted {
                message: "Deleted Customer.".to_string(),
            }
        }
        Err(error) => {
            warn!(%error, customer_id = %id, "customer delete failed");
            DeleteOutcome::ExecutionFailure {
                message: "Database Error: Failed to Delete Customer.".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    fn state() -> AppState {
        AppState::in_memory(&DashboardConfig::default())
    }

    #[tokio::test]
    async fn test_create_customer_redirects_to_listing() {
        let state = state();
        let form = FormPayload::from_pairs([
            ("name", "Evil Rabbit"),
            ("email", "evil@rabbit.dev"),
            ("image_url", ""),
        ]);

        let outcome = create_customer(&state, &form).await;

        assert_eq!(
            outcome,
            ActionOutcome::Success {
                next_path: "/dashboard/customers"
            }
        );
        assert_eq!(state.customers.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_customer_rejects_bad_email_without_writing() {
        let state = state();
        let form = FormPayload::from_pairs([
            ("name", "Evil Rabbit"),
            ("email", "nope"),
            ("image_url", ""),
        ]);

        let outcome = create_customer(&state, &form).await;

        match outcome {
            ActionOutcome::ValidationFailure { errors, message } => {
                assert_eq!(message, "Missing Fields. Failed to Create Customer.");
                assert!(errors.contains_key("customerEmail"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(state.customers.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_customer_still_confirms() {
        let state = state();
        let outcome = delete_customer(&state, &Uuid::new_v4()).await;
        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                message: "Deleted Customer.".to_string()
            }
        );
    }
}
