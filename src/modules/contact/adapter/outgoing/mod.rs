pub mod emailjs_mailer;
pub mod smtp_mailer;

pub use emailjs_mailer::{EmailJsConfig, EmailJsContactMailer};
pub use smtp_mailer::SmtpContactMailer;
