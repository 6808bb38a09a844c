use actix_web::{put, web, Responder};
use serde_json::Value;
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::section::PortfolioSection;
use crate::portfolio::application::ports::incoming::use_cases::UpdateSectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace one portfolio section
///
/// The body is the whole section: an object for `personalInfo` and `skills`,
/// an array for the others.
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/{section}",
    tag = "portfolio",
    security(("bearer_auth" = [])),
    params(("section" = String, Path, description = "Section key, e.g. `projects`")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Saved section"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Unknown section"),
        (status = 502, description = "Image upload failed"),
    )
)]
#[put("/api/admin/portfolio/{section}")]
pub async fn update_section_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section: PortfolioSection = match path.parse() {
        Ok(section) => section,
        Err(e) => return ApiResponse::not_found("SECTION_NOT_FOUND", &e.to_string()),
    };

    match data
        .portfolio
        .update_section
        .execute(section, body.into_inner())
        .await
    {
        Ok(saved) => ApiResponse::success(saved),

        Err(UpdateSectionError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateSectionError::InvalidImage(msg)) => {
            warn!(section = %section, error = %msg, "Rejected section image");
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(UpdateSectionError::ImageUploadFailed(msg)) => {
            error!(section = %section, error = %msg, "Section image upload failed");
            ApiResponse::bad_gateway("IMAGE_UPLOAD_FAILED", "Failed to upload image")
        }

        Err(UpdateSectionError::RepositoryError(msg)) => {
            error!(section = %section, "Failed to save section: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
