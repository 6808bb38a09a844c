mod admin;

pub use admin::{AdminUser, ADMIN_SESSION_COOKIE};
