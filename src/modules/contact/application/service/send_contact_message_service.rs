use async_trait::async_trait;
use tracing::info;

use crate::contact::application::domain::contact_message::{ContactForm, ContactMessage};
use crate::contact::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::contact_mailer::{ContactError, ContactMailer};

pub struct SendContactMessageService<M>
where
    M: ContactMailer,
{
    mailer: M,
}

impl<M> SendContactMessageService<M>
where
    M: ContactMailer,
{
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl<M> SendContactMessageUseCase for SendContactMessageService<M>
where
    M: ContactMailer + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<(), SendContactMessageError> {
        let message = ContactMessage::try_from(form)
            .map_err(|e| SendContactMessageError::Validation(e.to_string()))?;

        self.mailer.send(&message).await.map_err(|e| match e {
            ContactError::NotConfigured => SendContactMessageError::NotConfigured,
            ContactError::Delivery(msg) => SendContactMessageError::DeliveryFailed(msg),
        })?;

        info!(chars = message.message.chars().count(), "Contact message forwarded");
        Ok(())
    }
}
