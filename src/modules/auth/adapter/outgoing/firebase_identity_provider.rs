use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::application::domain::entities::Identity;
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};

pub const DEFAULT_IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com";

/// Error messages the sign-in endpoint uses for bad credentials.
const CREDENTIAL_ERRORS: &[&str] = &[
    "INVALID_PASSWORD",
    "EMAIL_NOT_FOUND",
    "INVALID_LOGIN_CREDENTIALS",
    "USER_DISABLED",
    "INVALID_EMAIL",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInPayload<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Email/password accounts hosted by Firebase Authentication (REST API).
#[derive(Clone)]
pub struct FirebaseIdentityProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl FirebaseIdentityProvider {
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self::with_base_url(api_key, DEFAULT_IDENTITY_TOOLKIT_BASE, client)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.base_url, self.api_key
        )
    }
}

/// Maps an error body from the sign-in endpoint.
fn classify_error(status: u16, body: &str) -> IdentityError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_default();

    // Messages may carry a suffix: "TOO_MANY_ATTEMPTS_TRY_LATER : ..."
    let code = message.split(':').next().unwrap_or_default().trim();

    if status == 400 && CREDENTIAL_ERRORS.contains(&code) {
        IdentityError::InvalidCredentials
    } else if code.is_empty() {
        IdentityError::Unavailable(format!("status {}", status))
    } else {
        IdentityError::Unavailable(format!("status {}: {}", status, code))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        let response = self
            .client
            .post(self.sign_in_url())
            .json(&SignInPayload {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity provider request failed");
                IdentityError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_error(status.as_u16(), &body);
            debug!(status = status.as_u16(), error = %err, "Sign-in rejected");
            return Err(err);
        }

        let body: SignInResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;

        Ok(Identity {
            uid: body.local_id,
            email: body.email,
            id_token: body.id_token,
        })
    }

    /// The REST API keeps no server-side session; the ID token simply expires.
    async fn sign_out(&self, identity: &Identity) -> Result<(), IdentityError> {
        debug!(uid = %identity.uid, "Discarding provider session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_url_includes_key() {
        let provider =
            FirebaseIdentityProvider::with_base_url("abc", "http://localhost:9099/", reqwest::Client::new());
        assert_eq!(
            provider.sign_in_url(),
            "http://localhost:9099/v1/accounts:signInWithPassword?key=abc"
        );
    }

    #[test]
    fn test_credential_errors_map_to_invalid_credentials() {
        for code in ["INVALID_PASSWORD", "EMAIL_NOT_FOUND", "INVALID_LOGIN_CREDENTIALS"] {
            let body = format!(r#"{{"error":{{"code":400,"message":"{}"}}}}"#, code);
            assert_eq!(classify_error(400, &body), IdentityError::InvalidCredentials);
        }
    }

    #[test]
    fn test_throttling_is_unavailable() {
        let body = r#"{"error":{"code":400,"message":"TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"}}"#;
        assert_eq!(
            classify_error(400, body),
            IdentityError::Unavailable("status 400: TOO_MANY_ATTEMPTS_TRY_LATER".to_string())
        );
    }

    #[test]
    fn test_unparseable_body_is_unavailable() {
        assert_eq!(
            classify_error(503, "<html>"),
            IdentityError::Unavailable("status 503".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let provider =
            FirebaseIdentityProvider::with_base_url("k", "http://127.0.0.1:1", reqwest::Client::new());

        let result = provider.sign_in("a@b.com", "pw").await;

        assert!(matches!(result, Err(IdentityError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_sign_out_is_noop() {
        let provider = FirebaseIdentityProvider::new("k", reqwest::Client::new());
        let identity = Identity {
            uid: "u1".into(),
            email: "a@b.com".into(),
            id_token: Some("t".into()),
        };
        assert!(provider.sign_out(&identity).await.is_ok());
    }
}
