//! Reusable field predicates
//!
//! Each constructor returns a boxed predicate suitable for
//! [`FieldRule::check`](super::rules::FieldRule::check). Predicates only
//! inspect the value variant they are written for and pass anything else
//! through; the rule's parse step fixes the variant ahead of them.

use super::rules::{Check, FieldValue};
use regex::Regex;
use std::sync::OnceLock;
use validator::ValidateEmail;

/// Value must be a non-empty string
pub fn non_empty() -> Check {
    Box::new(|value: &FieldValue| match value.as_text() {
        Some(s) => !s.is_empty(),
        None => true,
    })
}

/// Number must be strictly greater than `min`
pub fn greater_than(min: f64) -> Check {
    Box::new(move |value: &FieldValue| match value.as_number() {
        Some(n) => n > min,
        None => true,
    })
}

/// String must be one of the allowed values
pub fn one_of(allowed: &'static [&'static str]) -> Check {
    Box::new(move |value: &FieldValue| match value.as_text() {
        Some(s) => allowed.contains(&s),
        None => true,
    })
}

/// String must look like an email address
pub fn email() -> Check {
    Box::new(|value: &FieldValue| match value.as_text() {
        Some(s) => s.validate_email(),
        None => true,
    })
}

/// String must be a site-local path ending in an image extension
/// (`/avatars/evil-rabbit.png`). Absolute URLs do not match.
pub fn image_path() -> Check {
    static IMAGE_PATH_REGEX: OnceLock<Regex> = OnceLock::new();
    Box::new(|value: &FieldValue| match value.as_text() {
        Some(s) => {
            let regex = IMAGE_PATH_REGEX.get_or_init(|| {
                Regex::new(r"(?i)^(/[\w-]+)+\.(png|jpg|jpeg|gif|svg)$").unwrap()
            });
            regex.is_match(s)
        }
        None => true,
    })
}

/// String must be a well-formed absolute http(s) URL
pub fn absolute_url() -> Check {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    Box::new(|value: &FieldValue| match value.as_text() {
        Some(s) => {
            let regex =
                URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
            regex.is_match(s)
        }
        None => true,
    })
}

/// Empty string passes; anything else must satisfy the inner predicate
pub fn empty_or(inner: Check) -> Check {
    Box::new(move |value: &FieldValue| match value.as_text() {
        Some("") => true,
        _ => inner(value),
    })
}
