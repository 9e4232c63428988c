//! In-memory implementations of the stores for testing and development

use crate::entities::{Customer, CustomerFields, Invoice, InvoiceChanges, NewInvoice};
use crate::storage::{CustomerStore, InvoiceStore};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Like a store without the foreign-key constraint, it does not check that
/// `customer_id` names an existing customer.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    rows: Arc<RwLock<HashMap<Uuid, Invoice>>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, new: NewInvoice) -> Result<Invoice> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let invoice = Invoice {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            amount_cents: new.amount_cents,
            status: new.status,
            date: new.date,
        };
        rows.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // Mirrors SQL UPDATE: zero matched rows is still success
        if let Some(row) = rows.get_mut(id) {
            row.customer_id = changes.customer_id;
            row.amount_cents = changes.amount_cents;
            row.status = changes.status;
        }

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        rows.remove(id);

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.values().cloned().collect())
    }
}

/// In-memory customer store.
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    rows: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, fields: CustomerFields) -> Result<Customer> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let customer = Customer {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            image_url: fields.image_url,
        };
        rows.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn update(&self, id: &Uuid, fields: CustomerFields) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if let Some(row) = rows.get_mut(id) {
            row.name = fields.name;
            row.email = fields.email;
            row.image_url = fields.image_url;
        }

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        rows.remove(id);

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Customer>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.values().cloned().collect())
    }
}
