//! Invoice entity: row types, status enum, and the create/update form schema

use crate::core::form::FormPayload;
use crate::core::outcome::FieldErrors;
use crate::core::validation::validators::{greater_than, non_empty, one_of};
use crate::core::validation::{FieldRule, FieldValue, Schema};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// The two states an invoice can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(anyhow!("unknown invoice status: {other}")),
        }
    }
}

/// A stored invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    /// Opaque reference to a customer; integrity is the store's job
    pub customer_id: String,
    /// Amount in minor units (cents)
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    /// Stamped server-side at creation; never updated
    pub date: NaiveDate,
}

/// Column values for `INSERT INTO invoices`
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Column values for a full-row `UPDATE invoices ... WHERE id = ...`.
///
/// The date column is deliberately absent: it is immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Convert a validated decimal amount to minor units.
///
/// Multiply by 100 and round to the nearest cent: `19.99` becomes `1999`.
/// Rounding, not truncation: `19.99 * 100.0` is `1998.999...` in f64.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn invoice_schema() -> Schema {
    Schema::new(vec![
        FieldRule::text("customerId", "Please select a customer.").check(non_empty()),
        FieldRule::number("amount", "Please enter an amount greater than $0.")
            .check(greater_than(0.0)),
        FieldRule::text("status", "Please select an invoice status.")
            .check(one_of(&["pending", "paid"])),
    ])
}

/// Coerced, validated invoice form fields
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceDraft {
    /// Validate a form submission against the invoice rule table.
    ///
    /// On failure all field violations are returned; nothing else happens.
    pub fn parse(form: &FormPayload) -> Result<Self, FieldErrors> {
        let mut values = invoice_schema().validate(form)?;

        let customer_id = match values.remove("customerId") {
            Some(FieldValue::Text(s)) => s,
            _ => String::new(), // schema guarantees presence
        };
        let amount = match values.remove("amount") {
            Some(FieldValue::Number(n)) => n,
            _ => 0.0,
        };
        let status = match values.remove("status").as_ref().and_then(FieldValue::as_text) {
            Some("paid") => InvoiceStatus::Paid,
            _ => InvoiceStatus::Pending, // schema restricts to pending|paid
        };

        Ok(Self {
            customer_id,
            amount,
            status,
        })
    }

    /// The validated amount in minor units
    pub fn amount_cents(&self) -> i64 {
        amount_to_cents(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_form() {
        let form = FormPayload::from_pairs([
            ("customerId", "3958dc9e-712f-4377-85e9-fec4b6a6442a"),
            ("amount", "19.99"),
            ("status", "paid"),
        ]);
        let draft = InvoiceDraft::parse(&form).unwrap();
        assert_eq!(draft.customer_id, "3958dc9e-712f-4377-85e9-fec4b6a6442a");
        assert_eq!(draft.amount, 19.99);
        assert_eq!(draft.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_amount_conversion_rounds_to_minor_units() {
        assert_eq!(amount_to_cents(19.99), 1999);
        assert_eq!(amount_to_cents(100.0), 10000);
        assert_eq!(amount_to_cents(0.01), 1);
        // Values whose f64 product lands just below the integer
        assert_eq!(amount_to_cents(1.15), 115);
        assert_eq!(amount_to_cents(8.20), 820);
    }

    #[test]
    fn test_parse_rejects_zero_amount() {
        let form = FormPayload::from_pairs([
            ("customerId", "cust-1"),
            ("amount", "0"),
            ("status", "pending"),
        ]);
        let errors = InvoiceDraft::parse(&form).unwrap_err();
        assert_eq!(
            errors["amount"],
            vec!["Please enter an amount greater than $0."]
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        let form = FormPayload::from_pairs([
            ("customerId", "cust-1"),
            ("amount", "twenty"),
            ("status", "pending"),
        ]);
        let errors = InvoiceDraft::parse(&form).unwrap_err();
        assert!(errors.contains_key("amount"));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let form = FormPayload::from_pairs([
            ("customerId", "cust-1"),
            ("amount", "5"),
            ("status", "overdue"),
        ]);
        let errors = InvoiceDraft::parse(&form).unwrap_err();
        assert_eq!(errors["status"], vec!["Please select an invoice status."]);
    }

    #[test]
    fn test_parse_collects_all_violations() {
        let errors = InvoiceDraft::parse(&FormPayload::new()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            InvoiceStatus::from_str("pending").unwrap(),
            InvoiceStatus::Pending
        );
        assert_eq!(InvoiceStatus::from_str("paid").unwrap(), InvoiceStatus::Paid);
        assert!(InvoiceStatus::from_str("overdue").is_err());
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Pending).unwrap(),
            r#""pending""#
        );
    }
}
