use serde::{Deserialize, Serialize};

/// A signed-in account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    /// Provider session token, when the provider issues one.
    #[serde(skip_serializing)]
    pub id_token: Option<String>,
}

/// What a successful admin login hands back to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub uid: String,
    pub email: String,
    pub access_token: String,
    pub expires_in: i64,
}
