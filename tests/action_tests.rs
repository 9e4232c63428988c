//! End-to-end tests for the mutation pipeline over the in-memory backend:
//! validate -> execute -> invalidate -> redirect.

use acme_dashboard::prelude::*;
use anyhow::bail;
use chrono::Utc;
use std::sync::Arc;

fn test_state() -> (
    AppState,
    InMemoryInvoiceStore,
    InMemoryCustomerStore,
    InMemoryViewCache,
) {
    let invoices = InMemoryInvoiceStore::new();
    let customers = InMemoryCustomerStore::new();
    let cache = InMemoryViewCache::new();
    let state = AppState::new(
        Arc::new(invoices.clone()),
        Arc::new(customers.clone()),
        Arc::new(cache.clone()),
        Arc::new(StaticIdentityProvider::new("user@acme.dev", "123456")),
        ValidationOptions::default(),
    );
    (state, invoices, customers, cache)
}

fn invoice_form(customer_id: &str, amount: &str, status: &str) -> FormPayload {
    FormPayload::from_pairs([
        ("customerId", customer_id),
        ("amount", amount),
        ("status", status),
    ])
}

fn customer_form(name: &str, email: &str, image_url: &str) -> FormPayload {
    FormPayload::from_pairs([("name", name), ("email", email), ("image_url", image_url)])
}

// ---------------------------------------------------------------------------
// Stores that reject every statement, standing in for an unreachable or
// constraint-enforcing database
// ---------------------------------------------------------------------------

struct FailingInvoiceStore;

#[async_trait]
impl InvoiceStore for FailingInvoiceStore {
    async fn insert(&self, _new: NewInvoice) -> Result<Invoice> {
        bail!("connection refused")
    }
    async fn update(&self, _id: &Uuid, _changes: InvoiceChanges) -> Result<()> {
        bail!("connection refused")
    }
    async fn delete(&self, _id: &Uuid) -> Result<()> {
        bail!("connection refused")
    }
    async fn get(&self, _id: &Uuid) -> Result<Option<Invoice>> {
        bail!("connection refused")
    }
    async fn list(&self) -> Result<Vec<Invoice>> {
        bail!("connection refused")
    }
}

struct FailingCustomerStore;

#[async_trait]
impl CustomerStore for FailingCustomerStore {
    async fn insert(&self, _fields: CustomerFields) -> Result<Customer> {
        bail!("connection refused")
    }
    async fn update(&self, _id: &Uuid, _fields: CustomerFields) -> Result<()> {
        bail!("connection refused")
    }
    async fn delete(&self, _id: &Uuid) -> Result<()> {
        bail!("connection refused")
    }
    async fn get(&self, _id: &Uuid) -> Result<Option<Customer>> {
        bail!("connection refused")
    }
    async fn list(&self) -> Result<Vec<Customer>> {
        bail!("connection refused")
    }
}

fn failing_state() -> (AppState, InMemoryViewCache) {
    let cache = InMemoryViewCache::new();
    let state = AppState::new(
        Arc::new(FailingInvoiceStore),
        Arc::new(FailingCustomerStore),
        Arc::new(cache.clone()),
        Arc::new(StaticIdentityProvider::new("user@acme.dev", "123456")),
        ValidationOptions::default(),
    );
    (state, cache)
}

// ---------------------------------------------------------------------------
// Invoice pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_invoice_stores_minor_units_and_current_date() {
    let (state, invoices, _, cache) = test_state();

    let outcome = create_invoice(&state, &invoice_form("cust-1", "19.99", "pending")).await;

    assert_eq!(
        outcome,
        ActionOutcome::Success {
            next_path: INVOICES_PATH
        }
    );

    let rows = invoices.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer_id, "cust-1");
    assert_eq!(rows[0].amount_cents, 1999);
    assert_eq!(rows[0].status, InvoiceStatus::Pending);
    assert_eq!(rows[0].date, Utc::now().date_naive());
    assert_eq!(rows[0].date.format("%Y-%m-%d").to_string().len(), 10);

    assert!(cache.was_invalidated(INVOICES_PATH));
}

#[tokio::test]
async fn create_invoice_rejects_nonpositive_and_non_numeric_amounts() {
    let (state, invoices, _, cache) = test_state();

    for amount in ["0", "-5", "abc", ""] {
        let outcome = create_invoice(&state, &invoice_form("cust-1", amount, "pending")).await;
        match outcome {
            ActionOutcome::ValidationFailure { errors, .. } => {
                assert_eq!(
                    errors["amount"],
                    vec!["Please enter an amount greater than $0."],
                    "amount {amount:?} should be rejected"
                );
            }
            other => panic!("amount {amount:?}: expected validation failure, got {other:?}"),
        }
    }

    assert!(invoices.list().await.unwrap().is_empty());
    assert!(cache.invalidations().is_empty());
}

#[tokio::test]
async fn create_invoice_rejects_unknown_status() {
    let (state, invoices, _, _) = test_state();

    let outcome = create_invoice(&state, &invoice_form("cust-1", "10", "overdue")).await;

    match outcome {
        ActionOutcome::ValidationFailure { errors, .. } => {
            assert_eq!(errors["status"], vec!["Please select an invoice status."]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(invoices.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_invoice_store_failure_returns_generic_message() {
    let (state, cache) = failing_state();

    let outcome = create_invoice(&state, &invoice_form("cust-1", "19.99", "paid")).await;

    assert_eq!(
        outcome,
        ActionOutcome::ExecutionFailure {
            message: "Database Error: Failed to Create Invoice.".to_string()
        }
    );
    // No invalidation without a committed write
    assert!(cache.invalidations().is_empty());
}

#[tokio::test]
async fn update_invoice_rewrites_all_columns_but_not_date() {
    let (state, invoices, _, cache) = test_state();

    create_invoice(&state, &invoice_form("cust-1", "19.99", "pending")).await;
    let created = invoices.list().await.unwrap().remove(0);

    let outcome = update_invoice(
        &state,
        &created.id,
        &invoice_form("cust-2", "50", "paid"),
    )
    .await;

    assert_eq!(
        outcome,
        ActionOutcome::Success {
            next_path: INVOICES_PATH
        }
    );

    let updated = invoices.get(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.customer_id, "cust-2");
    assert_eq!(updated.amount_cents, 5000);
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.date, created.date);

    assert_eq!(cache.invalidations().len(), 2);
}

#[tokio::test]
async fn update_invoice_store_failure_returns_generic_message() {
    let (state, _) = failing_state();

    let outcome = update_invoice(
        &state,
        &Uuid::new_v4(),
        &invoice_form("cust-1", "10", "paid"),
    )
    .await;

    assert_eq!(
        outcome,
        ActionOutcome::ExecutionFailure {
            message: "Database Error: Failed to Update Invoice.".to_string()
        }
    );
}

#[tokio::test]
async fn delete_invoice_removes_row_and_invalidates_listing() {
    let (state, invoices, _, cache) = test_state();

    create_invoice(&state, &invoice_form("cust-1", "19.99", "pending")).await;
    let created = invoices.list().await.unwrap().remove(0);

    let outcome = delete_invoice(&state, &created.id).await;

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            message: "Deleted Invoice.".to_string()
        }
    );
    assert!(invoices.get(&created.id).await.unwrap().is_none());
    assert!(cache.was_invalidated(INVOICES_PATH));
}

#[tokio::test]
async fn delete_of_nonexistent_invoice_does_not_crash() {
    // A store without the row treats the DELETE as a no-op...
    let (state, _, _, _) = test_state();
    assert_eq!(
        delete_invoice(&state, &Uuid::new_v4()).await,
        DeleteOutcome::Deleted {
            message: "Deleted Invoice.".to_string()
        }
    );

    // ...while a store that errors yields the generic database message
    let (state, _) = failing_state();
    assert_eq!(
        delete_invoice(&state, &Uuid::new_v4()).await,
        DeleteOutcome::ExecutionFailure {
            message: "Database Error: Failed to Delete Invoice.".to_string()
        }
    );
}

#[tokio::test]
async fn concurrent_updates_resolve_to_one_full_row() {
    let (state, invoices, _, _) = test_state();

    create_invoice(&state, &invoice_form("cust-1", "10", "pending")).await;
    let id = invoices.list().await.unwrap().remove(0).id;

    let form_a = invoice_form("cust-a", "11", "paid");
    let form_b = invoice_form("cust-b", "22", "pending");
    let first = update_invoice(&state, &id, &form_a);
    let second = update_invoice(&state, &id, &form_b);
    let (a, b) = tokio::join!(first, second);
    assert!(a.is_success() && b.is_success());

    // Whichever statement executed last wins wholesale; rows never interleave
    let final_row = invoices.get(&id).await.unwrap().unwrap();
    let wrote_a = final_row.customer_id == "cust-a"
        && final_row.amount_cents == 1100
        && final_row.status == InvoiceStatus::Paid;
    let wrote_b = final_row.customer_id == "cust-b"
        && final_row.amount_cents == 2200
        && final_row.status == InvoiceStatus::Pending;
    assert!(wrote_a || wrote_b, "unexpected final row: {final_row:?}");
}

// ---------------------------------------------------------------------------
// Customer pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_customer_success_invalidates_customers_listing() {
    let (state, _, customers, cache) = test_state();

    let outcome = create_customer(
        &state,
        &customer_form("Evil Rabbit", "evil@rabbit.dev", "/customers/evil-rabbit.png"),
    )
    .await;

    assert_eq!(
        outcome,
        ActionOutcome::Success {
            next_path: CUSTOMERS_PATH
        }
    );
    assert_eq!(customers.list().await.unwrap().len(), 1);
    assert!(cache.was_invalidated(CUSTOMERS_PATH));
    assert!(!cache.was_invalidated(INVOICES_PATH));
}

#[tokio::test]
async fn create_customer_image_rule_matches_path_only_pattern() {
    let (state, _, customers, _) = test_state();

    // Accepted: empty and site-local image paths
    for image in ["", "/foo/bar.png"] {
        let outcome =
            create_customer(&state, &customer_form("Evil Rabbit", "evil@rabbit.dev", image)).await;
        assert!(outcome.is_success(), "image {image:?} should pass");
    }

    // Rejected: absolute URLs and non-image extensions
    for image in ["https://example.com/x.png", "/foo/bar.txt"] {
        let outcome =
            create_customer(&state, &customer_form("Evil Rabbit", "evil@rabbit.dev", image)).await;
        match outcome {
            ActionOutcome::ValidationFailure { errors, .. } => {
                assert_eq!(
                    errors["customerImageUrl"],
                    vec!["Please enter a valid URL or leave it empty."],
                    "image {image:?} should be rejected"
                );
            }
            other => panic!("image {image:?}: expected validation failure, got {other:?}"),
        }
    }

    assert_eq!(customers.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_customer_rewrites_full_row() {
    let (state, _, customers, _) = test_state();

    create_customer(&state, &customer_form("Evil Rabbit", "evil@rabbit.dev", "")).await;
    let created = customers.list().await.unwrap().remove(0);

    let outcome = update_customer(
        &state,
        &created.id,
        &customer_form("Good Rabbit", "good@rabbit.dev", "/customers/good-rabbit.png"),
    )
    .await;

    assert!(outcome.is_success());
    let updated = customers.get(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Good Rabbit");
    assert_eq!(updated.email, "good@rabbit.dev");
    assert_eq!(updated.image_url, "/customers/good-rabbit.png");
}

#[tokio::test]
async fn customer_store_failures_return_generic_messages() {
    let (state, _) = failing_state();

    let outcome =
        create_customer(&state, &customer_form("Evil Rabbit", "evil@rabbit.dev", "")).await;
    assert_eq!(
        outcome,
        ActionOutcome::ExecutionFailure {
            message: "Database Error: Failed to Create Customer.".to_string()
        }
    );

    let outcome = delete_customer(&state, &Uuid::new_v4()).await;
    assert_eq!(
        outcome,
        DeleteOutcome::ExecutionFailure {
            message: "Database Error: Failed to Delete Customer.".to_string()
        }
    );
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authenticate_against_static_provider() {
    let (state, ..) = test_state();

    let ok = authenticate(
        &state,
        &FormPayload::from_pairs([("email", "user@acme.dev"), ("password", "123456")]),
    )
    .await
    .unwrap();
    assert_eq!(ok, None);

    let rejected = authenticate(
        &state,
        &FormPayload::from_pairs([("email", "user@acme.dev"), ("password", "nope")]),
    )
    .await
    .unwrap();
    assert_eq!(rejected.as_deref(), Some("Invalid credentials."));
}
