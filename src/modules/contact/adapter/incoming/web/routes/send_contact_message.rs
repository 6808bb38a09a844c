use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::contact::application::domain::contact_message::ContactForm;
use crate::contact::application::ports::incoming::use_cases::SendContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactSentResponse {
    pub message: String,
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Forwarded", body = ContactSentResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 502, description = "Mail service rejected the message", body = ErrorResponse),
        (status = 503, description = "Mail service not configured", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.execute(req.into_inner()).await {
        Ok(()) => ApiResponse::success(ContactSentResponse {
            message: "Message sent".to_string(),
        }),

        Err(SendContactMessageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SendContactMessageError::NotConfigured) => {
            warn!("Contact form submitted but no mailer is configured");
            ApiResponse::service_unavailable(
                "CONTACT_NOT_CONFIGURED",
                "Contact form is not available right now",
            )
        }

        Err(SendContactMessageError::DeliveryFailed(msg)) => {
            error!(error = %msg, "Contact delivery failed");
            ApiResponse::bad_gateway("CONTACT_DELIVERY_FAILED", "Failed to send message")
        }
    }
}
