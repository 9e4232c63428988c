//! Create, update, and delete actions for invoices

use crate::actions::{invalidate, AppState};
use crate::cache::INVOICES_PATH;
use crate::core::form::FormPayload;
use crate::core::outcome::{ActionOutcome, DeleteOutcome};
use crate::entities::{InvoiceChanges, InvoiceDraft, NewInvoice};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Validate the submission, insert one invoice row, and redirect to the
/// invoices listing. The date is stamped server-side at execution time and
/// never changes afterwards.
pub async fn create_invoice(state: &AppState, form: &FormPayload) -> ActionOutcome {
    let draft = match InvoiceDraft::parse(form) {
        Ok(draft) => draft,
        Err(errors) => {
            return ActionOutcome::ValidationFailure {
                errors,
                message: "Missing Fields. Failed to Create Invoice.".to_string(),
            };
        }
    };

    let new = NewInvoice {
        customer_id: draft.customer_id.clone(),
        amount_cents: draft.amount_cents(),
        status: draft.status,
        date: Utc::now().date_naive(),
    };

    match state.invoices.insert(new).await {
        Ok(invoice) => debug!(invoice_id = %invoice.id, "created invoice"),
        Err(error) => {
            warn!(%error, "invoice insert failed");
            return ActionOutcome::ExecutionFailure {
                message: "Database Error: Failed to Create Invoice.".to_string(),
            };
        }
    }

    invalidate(state, INVOICES_PATH).await;
    ActionOutcome::Success {
        next_path: INVOICES_PATH,
    }
}

/// Validate the submission and rewrite all mutable columns of the row
/// identified by `id`.
///
/// `id` comes from the route, never from the form payload, and is not part
/// of the validated field set.
pub async fn update_invoice(state: &AppState, id: &Uuid, form: &FormPayload) -> ActionOutcome {
    let draft = match InvoiceDraft::parse(form) {
        Ok(draft) => draft,
        Err(errors) => {
            return ActionOutcome::ValidationFailure {
                errors,
                message: "Missing Fields. Failed to Update Invoice.".to_string(),
            };
        }
    };

    let changes = InvoiceChanges {
        customer_id: draft.customer_id.clone(),
        amount_cents: draft.amount_cents(),
        status: draft.status,
    };

    match state.invoices.update(id, changes).await {
        Ok(()) => debug!(invoice_id = %id, "updated invoice"),
        Err(error) => {
            warn!(%error, invoice_id = %id, "invoice update failed");
            return ActionOutcome::ExecutionFailure {
                message: "Database Error: Failed to Update Invoice.".to_string(),
            };
        }
    }

    invalidate(state, INVOICES_PATH).await;
    ActionOutcome::Success {
        next_path: INVOICES_PATH,
    }
}

/// Delete the row identified by `id` and confirm with a message.
pub async fn delete_invoice(state: &AppState, id: &Uuid) -> DeleteOutcome {
    match state.invoices.delete(id).await {
        Ok(()) => {
            debug!(invoice_id = %id, "deleted invoice");
            invalidate(state, INVOICES_PATH).await;
            DeleteOutcome::Deleted {
                message: "Deleted Invoice.".to_string(),
            }
        }
        Err(error) => {
            warn!(%error, invoice_id = %id, "invoice delete failed");
            DeleteOutcome::ExecutionFailure {
                message: "Database Error: Failed to Delete Invoice.".to_string(),
            }
        }
    }
}
