//! Login action delegating to the identity provider

use crate::actions::AppState;
use crate::core::auth::{AuthError, Credentials};
use crate::core::form::FormPayload;
use anyhow::Result;
use tracing::warn;

/// Forward the submitted credentials to the identity provider.
///
/// Returns `Ok(None)` when signed in and `Ok(Some(message))` for classified
/// failures. Unclassified provider faults propagate as errors so the caller's
/// framework-level handling sees them instead of a swallowed message.
pub async fn authenticate(state: &AppState, form: &FormPayload) -> Result<Option<String>> {
    let credentials = Credentials {
        email: form.get("email").unwrap_or_default().to_string(),
        password: form.get("password").unwrap_or_default().to_string(),
    };

    match state.identity.sign_in(&credentials).await {
        Ok(()) => Ok(None),
        Err(AuthError::InvalidCredentials) => Ok(Some("Invalid credentials.".to_string())),
        Err(AuthError::Provider(reason)) => {
            warn!(reason = %reason, "identity provider sign-in failed");
            Ok(Some("Something went wrong.".to_string()))
        }
        Err(AuthError::Internal(error)) => Err(error),
    }
}
