//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresInvoiceStore` and `PostgresCustomerStore` backed by a
//! PostgreSQL database via `sqlx::PgPool`. Every write is a single
//! parameterized statement; values are always bound, never interpolated.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! acme-dashboard = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! `customers` holds the dashboard's customer rows; `invoices` references
//! them through a foreign key, which is where the `customer_id` referential
//! integrity the actions layer relies on is enforced. Amounts are stored as
//! BIGINT minor units; the invoice date is a plain DATE with no time
//! component.

use crate::entities::{Customer, CustomerFields, Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::storage::{CustomerStore, InvoiceStore};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Apply the required tables (idempotent). Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create customers table: {}", e))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL REFERENCES customers(id),
            amount BIGINT NOT NULL,
            status VARCHAR(50) NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

/// Invoice store backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_invoice(
        (id, customer_id, amount, status, date): (Uuid, Uuid, i64, String, NaiveDate),
    ) -> Result<Invoice> {
        Ok(Invoice {
            id,
            customer_id: customer_id.to_string(),
            amount_cents: amount,
            status: InvoiceStatus::from_str(&status)
                .map_err(|e| anyhow!("Invalid status in invoices row {}: {}", id, e))?,
            date,
        })
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, new: NewInvoice) -> Result<Invoice> {
        // customer_id arrives as an opaque string; the ::uuid cast plus the
        // foreign key make the store reject dangling references
        let (id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1::uuid, $2, $3, $4) RETURNING id",
        )
        .bind(&new.customer_id)
        .bind(new.amount_cents)
        .bind(new.status.as_str())
        .bind(new.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert invoice: {}", e))?;

        Ok(Invoice {
            id,
            customer_id: new.customer_id,
            amount_cents: new.amount_cents,
            status: new.status,
            date: new.date,
        })
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()> {
        sqlx::query(
            "UPDATE invoices SET customer_id = $1::uuid, amount = $2, status = $3 \
             WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount_cents)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice: {}", e))?;

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let row: Option<(Uuid, Uuid, i64, String, NaiveDate)> = sqlx::query_as(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch invoice: {}", e))?;

        row.map(Self::row_to_invoice).transpose()
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows: Vec<(Uuid, Uuid, i64, String, NaiveDate)> = sqlx::query_as(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list invoices: {}", e))?;

        rows.into_iter().map(Self::row_to_invoice).collect()
    }
}

/// Customer store backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn insert(&self, fields: CustomerFields) -> Result<Customer> {
        let (id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO customers (name, email, image_url) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert customer: {}", e))?;

        Ok(Customer {
            id,
            name: fields.name,
            email: fields.email,
            image_url: fields.image_url,
        })
    }

    async fn update(&self, id: &Uuid, fields: CustomerFields) -> Result<()> {
        sqlx::query(
            "UPDATE customers SET name = $1, email = $2, image_url = $3 WHERE id = $4",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.image_url)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update customer: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete customer: {}", e))?;

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Customer>> {
        let row: Option<(Uuid, String, String, String)> = sqlx::query_as(
            "SELECT id, name, email, image_url FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch customer: {}", e))?;

        Ok(row.map(|(id, name, email, image_url)| Customer {
            id,
            name,
            email,
            image_url,
        }))
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let rows: Vec<(Uuid, String, String, String)> = sqlx::query_as(
            "SELECT id, name, email, image_url FROM customers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list customers: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, email, image_url)| Customer {
                id,
                name,
                email,
                image_url,
            })
            .collect())
    }
}
