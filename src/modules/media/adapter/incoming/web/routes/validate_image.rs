use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::media::application::domain::entities::ImageValidation;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateImageRequestDto {
    #[schema(example = "image/png")]
    pub content_type: String,

    /// Bytes
    #[schema(example = 204800)]
    pub size: u64,
}

/// Check a file against the upload policy
///
/// Always 200; the verdict is in the body.
#[utoipa::path(
    post,
    path = "/api/media/images/validate",
    tag = "media",
    security(("bearer_auth" = [])),
    request_body = ValidateImageRequestDto,
    responses((status = 200, description = "Validation result", body = ImageValidation))
)]
#[post("/api/media/images/validate")]
pub async fn validate_image_handler(
    _admin: AdminUser,
    req: web::Json<ValidateImageRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    ApiResponse::success(data.media.policy.validate(&dto.content_type, dto.size))
}
