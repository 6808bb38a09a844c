use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::Identity;
use crate::auth::application::ports::outgoing::{
    IdentityError, IdentityProvider, PasswordHasher,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAccount {
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

/// Identity provider backed by password hashes from configuration.
///
/// Account lookup ignores email case the way hosted providers do; the
/// returned identity carries the stored spelling.
pub struct LocalIdentityProvider {
    accounts: Vec<LocalAccount>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    sessions: Mutex<HashSet<String>>,
}

impl LocalIdentityProvider {
    pub fn new(accounts: Vec<LocalAccount>, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            accounts,
            hasher,
            sessions: Mutex::new(HashSet::new()),
        }
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn uid_for(email: &str) -> String {
        format!("local:{}", email.to_lowercase())
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()))
            .ok_or(IdentityError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(password, &account.password_hash)
            .await
            .map_err(|e| {
                warn!(error = %e, "Stored admin password hash could not be verified");
                IdentityError::Unavailable(e.to_string())
            })?;

        if !matches {
            return Err(IdentityError::InvalidCredentials);
        }

        let uid = Self::uid_for(&account.email);
        self.sessions.lock().await.insert(uid.clone());

        Ok(Identity {
            uid,
            email: account.email.clone(),
            id_token: None,
        })
    }

    async fn sign_out(&self, identity: &Identity) -> Result<(), IdentityError> {
        let removed = self.sessions.lock().await.remove(&identity.uid);
        debug!(uid = %identity.uid, removed, "Local session closed");
        Ok(())
    }
}
