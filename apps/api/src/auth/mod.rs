//! Session/auth gate. Credential checking is delegated entirely to an
//! external email+password identity provider; we keep only an opaque
//! in-process session per signed-in user.

pub mod handlers;
pub mod provider;
pub mod session;

use async_trait::async_trait;
use thiserror::Error;

/// Provider-side failure. Handlers collapse every variant into one
/// undifferentiated invalid-credentials response; the distinction exists
/// only for logging.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("auth provider error: {0}")]
    Provider(String),
}

/// What the identity provider tells us about a verified account.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    /// Provider-assigned uid.
    pub external_id: String,
    pub email: String,
}

/// Carried in `AppState` as `Arc<dyn AuthProvider>`; tests inject a fake.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthIdentity, AuthError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthIdentity, AuthError>;
}
