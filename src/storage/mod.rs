//! Storage implementations for different backends
//!
//! The mutation pipeline is agnostic to the backing store: it issues one
//! write per action through these traits and treats any failure as an
//! opaque execution error.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::{InMemoryCustomerStore, InMemoryInvoiceStore};
#[cfg(feature = "postgres")]
pub use postgres::{ensure_schema, PostgresCustomerStore, PostgresInvoiceStore};

use crate::entities::{Customer, CustomerFields, Invoice, InvoiceChanges, NewInvoice};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Store for invoice rows.
///
/// Each method corresponds to exactly one parameterized statement. Races on
/// the same identifier resolve to whichever statement the store executes
/// last; there is no optimistic-concurrency check at this layer.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// `INSERT INTO invoices (customer_id, amount, status, date) VALUES (...)`
    async fn insert(&self, new: NewInvoice) -> Result<Invoice>;

    /// `UPDATE invoices SET customer_id=..., amount=..., status=... WHERE id=...`
    ///
    /// Rewrites all mutable columns. Updating an absent row is a no-op, as
    /// it is for the SQL statement.
    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()>;

    /// `DELETE FROM invoices WHERE id=...`; deleting an absent row is a no-op
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Fetch one row by id
    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>>;

    /// Fetch all rows (listing pages)
    async fn list(&self) -> Result<Vec<Invoice>>;
}

/// Store for customer rows; same contract shape as [`InvoiceStore`].
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// `INSERT INTO customers (name, email, image_url) VALUES (...)`
    async fn insert(&self, fields: CustomerFields) -> Result<Customer>;

    /// `UPDATE customers SET name=..., email=..., image_url=... WHERE id=...`
    async fn update(&self, id: &Uuid, fields: CustomerFields) -> Result<()>;

    /// `DELETE FROM customers WHERE id=...`; deleting an absent row is a no-op
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Fetch one row by id
    async fn get(&self, id: &Uuid) -> Result<Option<Customer>>;

    /// Fetch all rows (listing pages)
    async fn list(&self) -> Result<Vec<Customer>>;
}
