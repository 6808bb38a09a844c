pub mod contact_mailer;
