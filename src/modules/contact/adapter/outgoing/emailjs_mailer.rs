use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

use crate::config::optional;
use crate::contact::application::domain::contact_message::ContactMessage;
use crate::contact::application::ports::outgoing::contact_mailer::{ContactError, ContactMailer};

/// EmailJS credentials. All three ids are optional at startup; the mailer
/// refuses to send until they are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub api_url: String,
}

impl EmailJsConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.emailjs.com/api/v1.0/email/send";

    pub fn from_env() -> Self {
        Self {
            service_id: optional("EMAILJS_SERVICE_ID"),
            template_id: optional("EMAILJS_TEMPLATE_ID"),
            public_key: optional("EMAILJS_PUBLIC_KEY"),
            api_url: optional("EMAILJS_API_URL")
                .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.service_id.as_deref()?,
            self.template_id.as_deref()?,
            self.public_key.as_deref()?,
        ))
    }
}

/// Forwards contact messages through the EmailJS REST endpoint.
#[derive(Clone)]
pub struct EmailJsContactMailer {
    config: EmailJsConfig,
    client: Client,
}

impl EmailJsContactMailer {
    pub fn new(config: EmailJsConfig, client: Client) -> Self {
        if !config.is_configured() {
            warn!("EmailJS credentials missing; contact form will be rejected");
        }
        Self { config, client }
    }

    fn payload(&self, message: &ContactMessage) -> Result<Value, ContactError> {
        let (service_id, template_id, public_key) =
            self.config.credentials().ok_or(ContactError::NotConfigured)?;

        Ok(json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": {
                "from_name": message.name,
                "from_email": message.email,
                "reply_to": message.email,
                "subject": message.subject_line(),
                "message": message.message,
            }
        }))
    }
}

#[async_trait]
impl ContactMailer for EmailJsContactMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let payload = self.payload(message)?;

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Delivery(format!(
            "status {}: {}",
            status.as_u16(),
            body.trim()
        )))
    }
}
