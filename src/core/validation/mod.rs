//! Declarative form validation
//!
//! Each mutable entity declares an explicit table of field rules —
//! (field name, parse function, predicate list, error message) — evaluated
//! independently per field so every violation in a submission is collected in
//! one pass rather than stopping at the first failure.

pub mod rules;
pub mod validators;

pub use rules::{FieldRule, FieldValue, Schema};

use serde::{Deserialize, Serialize};

/// Toggles for rules with more than one defensible behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// When set, the customer image field must be a well-formed absolute URL
    /// instead of a site-local path. Off by default.
    #[serde(default)]
    pub strict_image_url: bool,
}
