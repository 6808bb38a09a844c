use actix_web::{post, web, Responder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::media::application::domain::entities::{UploadProgress, UploadedImage};
use crate::media::application::domain::staged_image::decode_data_url;
use crate::media::application::ports::incoming::use_cases::UploadImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequestDto {
    /// Base64 data URL of the picked file
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub image: String,

    /// Stem for the uploaded file name
    #[schema(example = "avatar")]
    pub file_name: Option<String>,
}

/// Upload an image
///
/// Validates a staged data URL and uploads it to the image CDN.
#[utoipa::path(
    post,
    path = "/api/media/images",
    tag = "media",
    security(("bearer_auth" = [])),
    request_body = UploadImageRequestDto,
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadedImage>)),
        (
            status = 400,
            description = "Not an acceptable image",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_IMAGE",
                    "message": "Invalid file type. Please upload a JPEG, PNG, GIF, or WebP image."
                }
            })
        ),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 502, description = "CDN rejected the upload", body = ErrorResponse),
    )
)]
#[post("/api/media/images")]
pub async fn upload_image_handler(
    admin: AdminUser,
    req: web::Json<UploadImageRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let stem = dto.file_name.as_deref().unwrap_or("image");

    let file = match decode_data_url(&dto.image, stem) {
        Ok(file) => file,
        Err(e) => {
            warn!(error = %e, "Rejected upload payload");
            return ApiResponse::bad_request("INVALID_IMAGE", &e.to_string());
        }
    };

    info!(uid = %admin.uid, file_name = %file.file_name, size = file.size(), "Image upload requested");

    let progress = Arc::new(|p: UploadProgress| {
        debug!(percent = p.percent(), "Upload progress");
    });

    match data.media.upload.execute(file, progress).await {
        Ok(uploaded) => ApiResponse::created(uploaded),
        Err(UploadImageError::InvalidImage(msg)) => ApiResponse::bad_request("INVALID_IMAGE", &msg),
        Err(UploadImageError::UploadFailed(msg)) => {
            error!(error = %msg, "Image upload failed");
            ApiResponse::bad_gateway("IMAGE_UPLOAD_FAILED", "Failed to upload image")
        }
    }
}
