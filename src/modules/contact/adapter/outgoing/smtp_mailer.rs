use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::contact::application::domain::contact_message::ContactMessage;
use crate::contact::application::ports::outgoing::contact_mailer::{ContactError, ContactMailer};

/// Transport seam so the message formatting can be tested without a server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Sends contact messages to the site owner over SMTP, with Reply-To set
/// to the visitor.
pub struct SmtpContactMailer {
    mailer: Box<dyn Mailer>,
    from_email: String,
    recipient: String,
}

impl SmtpContactMailer {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, recipient: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(
            Box::new(transport),
            &config.from_email,
            &config.recipient,
        ))
    }

    fn build(&self, message: &ContactMessage) -> Result<Message, ContactError> {
        let parse = |raw: &str| {
            raw.parse::<Mailbox>()
                .map_err(|e| ContactError::Delivery(format!("invalid address '{}': {}", raw, e)))
        };

        let reply_to = Mailbox::new(Some(message.name.clone()), parse(&message.email)?.email);

        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            message.name, message.email, message.message
        );

        Message::builder()
            .from(parse(&self.from_email)?)
            .to(parse(&self.recipient)?)
            .reply_to(reply_to)
            .subject(message.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| ContactError::Delivery(e.to_string()))
    }
}

#[async_trait]
impl ContactMailer for SmtpContactMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let email = self.build(message)?;
        self.mailer.send(email).await.map_err(ContactError::Delivery)
    }
}
