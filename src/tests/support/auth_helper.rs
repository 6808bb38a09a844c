use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Identity;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "portfolio-cms-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    }
}

/// Same keys every call, so tokens from one instance verify in another.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

pub struct TestTokens;

impl TestTokens {
    pub fn admin(email: &str) -> String {
        let identity = Identity {
            uid: "admin-uid".to_string(),
            email: email.to_string(),
            id_token: None,
        };
        test_token_provider()
            .generate_access_token(&identity, true)
            .expect("test token")
    }

    /// `Authorization` header value for an admin request.
    pub fn admin_bearer() -> String {
        format!("Bearer {}", Self::admin("owner@example.com"))
    }
}
