//! The two mutable entities managed by the dashboard

pub mod customer;
pub mod invoice;

pub use customer::{Customer, CustomerFields};
pub use invoice::{amount_to_cents, Invoice, InvoiceChanges, InvoiceDraft, InvoiceStatus, NewInvoice};
