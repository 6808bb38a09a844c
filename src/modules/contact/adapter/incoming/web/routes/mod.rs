mod send_contact_message;

pub use send_contact_message::{send_contact_message_handler, ContactSentResponse};
pub use send_contact_message::__path_send_contact_message_handler;
