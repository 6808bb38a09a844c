use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::ports::outgoing::{
    IdentityError, IdentityProvider, TokenProvider,
};

// ========================= Login Request =========================

/// Validated credentials. The email keeps its case because the admin check
/// compares it exactly.
#[derive(Debug, Clone)]
pub struct LoginAdminRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginAdminRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_string(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signed in fine, but not as the configured admin.
    #[error("Unauthorized access. Only admin can access this area.")]
    NotAdmin,

    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Use Case =============================

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginAdminRequest) -> Result<AdminSession, LoginAdminError>;
}

pub struct LoginAdminUseCase {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    admin_email: String,
}

impl LoginAdminUseCase {
    pub fn new(
        identity: Arc<dyn IdentityProvider + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            tokens,
            admin_email: admin_email.into(),
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginAdminRequest) -> Result<AdminSession, LoginAdminError> {
        let identity = self
            .identity
            .sign_in(request.email(), request.password())
            .await
            .map_err(|e| match e {
                IdentityError::InvalidCredentials => LoginAdminError::InvalidCredentials,
                IdentityError::Unavailable(msg) | IdentityError::InvalidResponse(msg) => {
                    LoginAdminError::ProviderUnavailable(msg)
                }
            })?;

        // Exact match, case included.
        if identity.email != self.admin_email {
            warn!(email = %identity.email, "Non-admin account signed in; closing session");
            if let Err(e) = self.identity.sign_out(&identity).await {
                warn!(error = %e, "Failed to sign out non-admin session");
            }
            return Err(LoginAdminError::NotAdmin);
        }

        let access_token = self
            .tokens
            .generate_access_token(&identity, true)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        info!(uid = %identity.uid, "Admin signed in");

        Ok(AdminSession {
            uid: identity.uid,
            email: identity.email,
            access_token,
            expires_in: self.tokens.access_token_ttl(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::Identity;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== LoginAdminRequest ====================

    #[test]
    fn test_request_trims_but_keeps_case() {
        let req = LoginAdminRequest::new("  Owner@Example.com ".into(), "pw".into()).unwrap();
        assert_eq!(req.email(), "Owner@Example.com");
        assert_eq!(req.password(), "pw");
    }

    #[test]
    fn test_request_validation_errors() {
        assert_eq!(
            LoginAdminRequest::new(" ".into(), "pw".into()).unwrap_err(),
            LoginRequestError::EmptyEmail
        );
        assert_eq!(
            LoginAdminRequest::new("nope".into(), "pw".into()).unwrap_err(),
            LoginRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginAdminRequest::new("a@b.com".into(), "".into()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );
    }

    // ==================== LoginAdminUseCase ====================

    struct MockIdentityProvider {
        result: Result<Identity, IdentityError>,
        sign_outs: AtomicUsize,
    }

    impl MockIdentityProvider {
        fn signs_in_as(email: &str) -> Self {
            Self {
                result: Ok(Identity {
                    uid: "uid-1".into(),
                    email: email.into(),
                    id_token: None,
                }),
                sign_outs: AtomicUsize::new(0),
            }
        }

        fn fails_with(err: IdentityError) -> Self {
            Self {
                result: Err(err),
                sign_outs: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Identity, IdentityError> {
            self.result.clone()
        }

        async fn sign_out(&self, _identity: &Identity) -> Result<(), IdentityError> {
            self.sign_outs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn tokens() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".into(),
            issuer: "portfolio-cms-test".into(),
            access_token_expiry: 3600,
        }))
    }

    fn request(email: &str) -> LoginAdminRequest {
        LoginAdminRequest::new(email.into(), "secret".into()).unwrap()
    }

    #[tokio::test]
    async fn test_admin_login_issues_admin_token() {
        let provider = Arc::new(MockIdentityProvider::signs_in_as("owner@example.com"));
        let tokens = tokens();
        let use_case = LoginAdminUseCase::new(provider, tokens.clone(), "owner@example.com");

        let session = use_case.execute(request("owner@example.com")).await.unwrap();

        assert_eq!(session.email, "owner@example.com");
        assert_eq!(session.expires_in, 3600);
        let claims = tokens.verify_token(&session.access_token).unwrap();
        assert!(claims.admin);
        assert_eq!(claims.sub, "uid-1");
    }

    #[tokio::test]
    async fn test_other_account_is_signed_out_and_rejected() {
        let provider = Arc::new(MockIdentityProvider::signs_in_as("visitor@example.com"));
        let use_case = LoginAdminUseCase::new(provider.clone(), tokens(), "owner@example.com");

        let result = use_case.execute(request("visitor@example.com")).await;

        assert_eq!(result.unwrap_err(), LoginAdminError::NotAdmin);
        assert_eq!(provider.sign_outs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_admin_email_comparison_is_case_sensitive() {
        let provider = Arc::new(MockIdentityProvider::signs_in_as("Owner@Example.com"));
        let use_case = LoginAdminUseCase::new(provider, tokens(), "owner@example.com");

        let result = use_case.execute(request("Owner@Example.com")).await;

        assert_eq!(result.unwrap_err(), LoginAdminError::NotAdmin);
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let provider = Arc::new(MockIdentityProvider::fails_with(
            IdentityError::InvalidCredentials,
        ));
        let use_case = LoginAdminUseCase::new(provider, tokens(), "owner@example.com");

        let result = use_case.execute(request("owner@example.com")).await;

        assert_eq!(result.unwrap_err(), LoginAdminError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_provider_outage() {
        let provider = Arc::new(MockIdentityProvider::fails_with(IdentityError::Unavailable(
            "timeout".into(),
        )));
        let use_case = LoginAdminUseCase::new(provider, tokens(), "owner@example.com");

        let result = use_case.execute(request("owner@example.com")).await;

        assert_eq!(
            result.unwrap_err(),
            LoginAdminError::ProviderUnavailable("timeout".into())
        );
    }
}
