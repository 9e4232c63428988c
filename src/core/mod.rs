//! Core building blocks: form payloads, validation, outcomes, auth seam

pub mod auth;
pub mod form;
pub mod outcome;
pub mod validation;

pub use auth::{AuthError, Credentials, IdentityProvider, StaticIdentityProvider};
pub use form::FormPayload;
pub use outcome::{ActionOutcome, DeleteOutcome, FieldErrors, State};
pub use validation::{FieldRule, FieldValue, Schema, ValidationOptions};
