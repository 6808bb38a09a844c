use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Raw contact-form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at most {} characters", MAX_MESSAGE_CHARS)]
    MessageTooLong,
}

/// A validated message ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Subject line used when the visitor left it blank.
    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(subject) => subject.clone(),
            None => format!("Portfolio contact from {}", self.name),
        }
    }
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ContactMessageError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.trim().to_string();
        let email = form.email.trim().to_string();
        let message = form.message.trim().to_string();

        if name.is_empty() {
            return Err(ContactMessageError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ContactMessageError::MissingField("email"));
        }
        if !EmailAddress::is_valid(&email) {
            return Err(ContactMessageError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactMessageError::MissingField("message"));
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactMessageError::MessageTooLong);
        }

        Ok(Self {
            name,
            email,
            subject: form
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message,
        })
    }
}
