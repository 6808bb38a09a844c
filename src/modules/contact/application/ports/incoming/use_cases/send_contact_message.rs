use async_trait::async_trait;

use crate::contact::application::domain::contact_message::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("{0}")]
    Validation(String),

    #[error("Contact delivery is not configured")]
    NotConfigured,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<(), SendContactMessageError>;
}
