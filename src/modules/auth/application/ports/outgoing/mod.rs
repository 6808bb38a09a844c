pub mod identity_provider;
pub mod password_hasher;
pub mod token_provider;

pub use identity_provider::{IdentityError, IdentityProvider};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
