use async_trait::async_trait;

use crate::contact::application::domain::contact_message::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Credentials for the mail service are absent.
    #[error("Contact delivery is not configured")]
    NotConfigured,

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}
