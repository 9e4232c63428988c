//! Server-side mutation actions
//!
//! Each action runs the same pipeline: validate the submitted fields, issue
//! exactly one parameterized write, invalidate the affected listing view,
//! and report a tagged outcome. Expected failures never escape an action;
//! only unclassified faults (see [`auth`]) propagate.

pub mod auth;
pub mod customer;
pub mod invoice;

pub use auth::authenticate;
pub use customer::{create_customer, delete_customer, update_customer};
pub use invoice::{create_invoice, delete_invoice, update_invoice};

use crate::cache::{InMemoryViewCache, ViewCache};
use crate::config::DashboardConfig;
use crate::core::auth::{IdentityProvider, StaticIdentityProvider};
use crate::core::validation::ValidationOptions;
use crate::storage::{
    CustomerStore, InMemoryCustomerStore, InMemoryInvoiceStore, InvoiceStore,
};
use std::sync::Arc;
use tracing::warn;

/// Shared services every action runs against
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceStore>,
    pub customers: Arc<dyn CustomerStore>,
    pub cache: Arc<dyn ViewCache>,
    pub identity: Arc<dyn IdentityProvider>,
    pub validation: ValidationOptions,
}

impl AppState {
    pub fn new(
        invoices: Arc<dyn InvoiceStore>,
        customers: Arc<dyn CustomerStore>,
        cache: Arc<dyn ViewCache>,
        identity: Arc<dyn IdentityProvider>,
        validation: ValidationOptions,
    ) -> Self {
        Self {
            invoices,
            customers,
            cache,
            identity,
            validation,
        }
    }

    /// State backed entirely by in-memory services, for development and tests
    pub fn in_memory(config: &DashboardConfig) -> Self {
        Self::new(
            Arc::new(InMemoryInvoiceStore::new()),
            Arc::new(InMemoryCustomerStore::new()),
            Arc::new(InMemoryViewCache::new()),
            Arc::new(StaticIdentityProvider::new(
                config.auth.email.clone(),
                config.auth.password.clone(),
            )),
            config.validation.clone(),
        )
    }
}

/// Mark a listing stale after a successful write.
///
/// An invalidation failure must not undo a committed mutation, so it is
/// logged and the action still succeeds.
pub(crate) async fn invalidate(state: &AppState, path: &str) {
    if let Err(error) = state.cache.invalidate(path).await {
        warn!(%error, path, "view-cache invalidation failed");
    }
}
