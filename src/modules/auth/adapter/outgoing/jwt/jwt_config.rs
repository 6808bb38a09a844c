use crate::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 8 * 60 * 60;
    pub const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 60 * 60;

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", Self::DEFAULT_ACCESS_EXPIRY)?;
        if access_token_expiry <= 0 || access_token_expiry > Self::MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", Self::MAX_ACCESS_EXPIRY),
            });
        }

        let issuer = optional("JWT_ISSUER").unwrap_or_else(|| "portfolio-cms".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
