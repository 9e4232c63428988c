//! Identity provider abstraction
//!
//! Credential checks are delegated to an external identity provider. This
//! module only defines the seam and the error taxonomy the authenticate
//! action maps to user-facing messages.

use async_trait::async_trait;
use thiserror::Error;

/// Credentials submitted by the login form
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Classified provider failures.
///
/// Anything the provider cannot classify is wrapped in `Internal` and is
/// expected to propagate past the action boundary.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider recognized the attempt and rejected the credentials
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other failure the provider classified (lockout, unreachable, ...)
    #[error("provider error: {0}")]
    Provider(String),

    /// Unclassified fault; treated as a framework-level error
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Seam to the external identity provider's sign-in flow
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Forward credentials to the provider; `Ok(())` means signed in
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Provider backed by a single configured credential pair.
///
/// For development and tests only; production deployments plug a real
/// provider behind [`IdentityProvider`].
pub struct StaticIdentityProvider {
    email: String,
    password: String,
}

impl StaticIdentityProvider {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.email == self.email && credentials.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
