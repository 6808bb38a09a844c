use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::config::parse_or;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    /// 4 MiB memory, 3 iterations, 1 lane.
    pub fn new() -> Self {
        Self::with_params(4 * 1024, 3, 1)
    }

    /// Falls back to argon2's defaults when the combination is rejected.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params = Params::new(memory_kib, iterations, parallelism, None).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid Argon2 params, using defaults");
            Params::default()
        });

        Self { params }
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`.
    pub fn from_env() -> Self {
        let memory_kib = parse_or("ARGON2_MEMORY_KIB", 4 * 1024u32).unwrap_or(4 * 1024);
        let iterations = parse_or("ARGON2_ITERATIONS", 3u32).unwrap_or(3);
        let parallelism = parse_or("ARGON2_PARALLELISM", 1u32).unwrap_or(1);

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    /// Parameters come from the PHC string, so hashes made elsewhere verify too.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_argon2_hash_and_verify_password() {
        let hasher = Argon2Hasher::new();

        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();
        assert!(hashed.starts_with("$argon2id$"));

        assert!(hasher.verify_password("SecurePassword123", &hashed).await.unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let hasher = Argon2Hasher::new();
        assert_eq!(
            hasher.verify_password("pw", "invalid-hash").await,
            Err(HashError::VerifyFailed)
        );
    }

    #[tokio::test]
    async fn test_invalid_params_fall_back_to_defaults() {
        let hasher = Argon2Hasher::with_params(0, 0, 0);
        let hashed = hasher.hash_password("pw").await.unwrap();
        assert!(hasher.verify_password("pw", &hashed).await.unwrap());
    }
}
