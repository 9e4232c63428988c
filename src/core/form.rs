//! Raw form submissions as opaque key-value pairs
//!
//! Browser forms arrive as flat `field name -> string value` mappings.
//! `FormPayload` wraps that mapping so the validation layer can distinguish
//! an absent field from an empty one.

use serde::Deserialize;
use std::collections::HashMap;

/// A flat, untyped form submission.
///
/// Derives `Deserialize` so it can be extracted directly from a
/// `application/x-www-form-urlencoded` request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(HashMap<String, String>);

impl FormPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from field/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Get a field's raw value, or `None` if the field was not submitted
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field's value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Number of submitted fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields were submitted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
