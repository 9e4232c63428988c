//! Tagged results for mutation actions
//!
//! Every mutation resolves to an explicit outcome instead of raising a
//! control-flow signal. The caller (usually the HTTP layer) is responsible
//! for acting on `Success` by transferring control to `next_path`.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field name -> ordered list of human-readable violation messages.
///
/// `BTreeMap` keeps serialization order deterministic across runs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result of a create or update action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The statement executed and the affected listing was invalidated;
    /// the caller should navigate to `next_path`.
    Success { next_path: &'static str },

    /// Input was rejected before any statement was issued.
    ValidationFailure {
        errors: FieldErrors,
        message: String,
    },

    /// The store rejected the statement; details were discarded.
    ExecutionFailure { message: String },
}

impl ActionOutcome {
    /// Whether this outcome carries a redirect
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success { .. })
    }

    /// Convert into the `{ errors?, message? }` wire shape.
    ///
    /// Returns `None` for `Success` — a successful mutation has no state to
    /// re-render, only a navigation target.
    pub fn into_state(self) -> Option<State> {
        match self {
            ActionOutcome::Success { .. } => None,
            ActionOutcome::ValidationFailure { errors, message } => Some(State {
                errors: Some(errors),
                message: Some(message),
            }),
            ActionOutcome::ExecutionFailure { message } => Some(State {
                errors: None,
                message: Some(message),
            }),
        }
    }
}

/// Result of a delete action.
///
/// Deletes are invoked from the listing they affect, so a successful delete
/// confirms with a message instead of redirecting.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The row is absent afterwards and the listing was invalidated.
    Deleted { message: String },

    /// The store rejected the statement; details were discarded.
    ExecutionFailure { message: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    /// Convert into the `{ errors?, message? }` wire shape
    pub fn into_state(self) -> State {
        let message = match self {
            DeleteOutcome::Deleted { message } => message,
            DeleteOutcome::ExecutionFailure { message } => message,
        };
        State {
            errors: None,
            message: Some(message),
        }
    }
}

/// Wire shape returned to the form on non-success:
/// `{ errors?: mapping<field, list<string>>, message?: string | null }`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
