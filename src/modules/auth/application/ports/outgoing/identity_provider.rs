use async_trait::async_trait;

use crate::auth::application::domain::entities::Identity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected identity provider response: {0}")]
    InvalidResponse(String),
}

/// Email/password sign-in delegated to an external account system.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, IdentityError>;

    /// Ends the provider-side session opened by `sign_in`.
    async fn sign_out(&self, identity: &Identity) -> Result<(), IdentityError>;
}
