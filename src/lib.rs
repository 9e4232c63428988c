//! # Acme Dashboard
//!
//! Server-side actions for a CRUD dashboard managing invoices and customers
//! in a relational store.
//!
//! ## Pipeline
//!
//! Every mutation follows the same shape:
//!
//! 1. **Validate**: the raw form submission is checked against a declarative
//!    per-field rule table; all violations are collected in one pass.
//! 2. **Execute**: one parameterized statement is issued against the store,
//!    with every value bound.
//! 3. **Invalidate**: the affected listing view is marked stale.
//! 4. **Redirect**: the action resolves to a tagged outcome carrying the
//!    listing path; the HTTP layer turns it into a `303 See Other`.
//!
//! Validation and execution failures are returned as structured state for
//! the form to re-render; only unclassified faults propagate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acme_dashboard::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     acme_dashboard::server::init_tracing();
//!
//!     let config = DashboardConfig::default();
//!     let state = AppState::in_memory(&config);
//!
//!     let form = FormPayload::from_pairs([
//!         ("customerId", "3958dc9e-712f-4377-85e9-fec4b6a6442a"),
//!         ("amount", "19.99"),
//!         ("status", "pending"),
//!     ]);
//!     match create_invoice(&state, &form).await {
//!         ActionOutcome::Success { next_path } => println!("redirect to {next_path}"),
//!         other => println!("{:?}", other.into_state()),
//!     }
//!
//!     acme_dashboard::server::serve(&config, state).await
//! }
//! ```

pub mod actions;
pub mod cache;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Actions ===
    pub use crate::actions::{
        authenticate, create_customer, create_invoice, delete_customer, delete_invoice,
        update_customer, update_invoice, AppState,
    };

    // === Core ===
    pub use crate::core::{
        ActionOutcome, AuthError, Credentials, DeleteOutcome, FieldErrors, FormPayload,
        IdentityProvider, State, StaticIdentityProvider, ValidationOptions,
    };

    // === Entities ===
    pub use crate::entities::{
        Customer, CustomerFields, Invoice, InvoiceChanges, InvoiceDraft, InvoiceStatus, NewInvoice,
    };

    // === Storage & cache ===
    pub use crate::cache::{InMemoryViewCache, ViewCache, CUSTOMERS_PATH, INVOICES_PATH};
    pub use crate::storage::{
        CustomerStore, InMemoryCustomerStore, InMemoryInvoiceStore, InvoiceStore,
    };
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresCustomerStore, PostgresInvoiceStore};

    // === Config & server ===
    pub use crate::config::DashboardConfig;
    pub use crate::server::build_dashboard_routes;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use uuid::Uuid;
}
