// src/config.rs
use std::env;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::contact::adapter::outgoing::emailjs_mailer::EmailJsConfig;
use crate::media::adapter::outgoing::cloudinary_image_host::CloudinaryConfig;
use crate::media::application::domain::policies::upload_policy::ImageUploadPolicy;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// ──────────────────────────────────────────────────────────
// Env helpers
// ──────────────────────────────────────────────────────────

/// Non-empty value of `key`, or `None`.
pub fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

/// Loads `.env.{RUST_ENV}` first and falls back to `.env`.
pub fn load_dotenv() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    env_name
}

// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cookie_secure: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080)?,
            cookie_secure: parse_or("COOKIE_SECURE", true)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStoreConfig {
    Postgres { url: String, max_connections: u32 },
    Memory,
}

impl ContentStoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match optional("CONTENT_STORE").as_deref() {
            Some("memory") => Ok(Self::Memory),
            None | Some("postgres") => Ok(Self::Postgres {
                url: required("DATABASE_URL")?,
                max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 20)?,
            }),
            Some(other) => Err(ConfigError::Invalid {
                key: "CONTENT_STORE",
                reason: format!("unknown store '{}', expected 'postgres' or 'memory'", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityConfig {
    Firebase { api_key: String },
    Local { password_hash: String },
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Compared case-sensitively against the signed-in identity.
    pub email: String,
    pub identity: IdentityConfig,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = required("ADMIN_EMAIL")?;

        let identity = match optional("AUTH_PROVIDER").as_deref() {
            None | Some("firebase") => IdentityConfig::Firebase {
                api_key: required("FIREBASE_API_KEY")?,
            },
            Some("local") => IdentityConfig::Local {
                password_hash: required("ADMIN_PASSWORD_HASH")?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "AUTH_PROVIDER",
                    reason: format!("unknown provider '{}'", other),
                })
            }
        };

        Ok(Self { email, identity })
    }
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub recipient: String,
}

#[derive(Debug, Clone)]
pub enum ContactConfig {
    EmailJs(EmailJsConfig),
    Smtp(SmtpConfig),
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match optional("CONTACT_MAILER").as_deref() {
            None | Some("emailjs") => Ok(Self::EmailJs(EmailJsConfig::from_env())),
            Some("smtp") => Ok(Self::Smtp(SmtpConfig {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from_email: required("EMAIL_FROM")?,
                recipient: required("CONTACT_RECIPIENT")?,
            })),
            Some(other) => Err(ConfigError::Invalid {
                key: "CONTACT_MAILER",
                reason: format!("unknown mailer '{}'", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Stamped on every article at creation.
    pub author: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            author: optional("ARTICLE_AUTHOR").unwrap_or_else(|| "Site Owner".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: ContentStoreConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub cloudinary: CloudinaryConfig,
    pub upload_policy: ImageUploadPolicy,
    pub contact: ContactConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            store: ContentStoreConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            cloudinary: CloudinaryConfig::from_env()?,
            upload_policy: ImageUploadPolicy::from_env()?,
            contact: ContactConfig::from_env()?,
            site: SiteConfig::from_env(),
        })
    }
}
