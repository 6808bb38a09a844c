mod firebase_identity_provider;
mod local_identity_provider;

pub mod jwt;
pub mod security;

pub use firebase_identity_provider::FirebaseIdentityProvider;
pub use local_identity_provider::{LocalAccount, LocalIdentityProvider};
