//! Customer entity: row types and the create/update form schema

use crate::core::form::FormPayload;
use crate::core::outcome::FieldErrors;
use crate::core::validation::validators::{absolute_url, email, empty_or, image_path, non_empty};
use crate::core::validation::{FieldRule, FieldValue, Schema, ValidationOptions};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored customer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Either empty or a site-local image path
    pub image_url: String,
}

/// Column values shared by `INSERT INTO customers` and the full-row
/// `UPDATE customers ... WHERE id = ...` (both rewrite the same columns).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// The customer form posts `name`/`email`/`image_url`; violations are
/// reported under the `customer*` field names the dashboard forms expect.
fn customer_schema(options: &ValidationOptions) -> Schema {
    let image_check = if options.strict_image_url {
        absolute_url()
    } else {
        image_path()
    };

    Schema::new(vec![
        FieldRule::text("customerName", "Please enter a customer name.")
            .from_source("name")
            .check(non_empty()),
        FieldRule::text("customerEmail", "Please enter a valid email address.")
            .from_source("email")
            .check(email()),
        FieldRule::text(
            "customerImageUrl",
            "Please enter a valid URL or leave it empty.",
        )
        .from_source("image_url")
        .check(empty_or(image_check)),
    ])
}

impl CustomerFields {
    /// Validate a form submission against the customer rule table.
    ///
    /// On failure all field violations are returned; nothing else happens.
    pub fn parse(form: &FormPayload, options: &ValidationOptions) -> Result<Self, FieldErrors> {
        let mut values = customer_schema(options).validate(form)?;

        let mut take = |key: &str| match values.remove(key) {
            Some(FieldValue::Text(s)) => s,
            _ => String::new(), // schema guarantees presence
        };

        Ok(Self {
            name: take("customerName"),
            email: take("customerEmail"),
            image_url: take("customerImageUrl"),
        })
    }
}
