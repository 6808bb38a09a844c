use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::article::application::domain::article::{Article, CreateArticleData};
use crate::article::application::ports::incoming::use_cases::CreateArticleError;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create an article
///
/// A staged `data:` URL in `image` is uploaded to the CDN before the article is saved.
#[utoipa::path(
    post,
    path = "/api/admin/articles",
    tag = "articles",
    security(("bearer_auth" = [])),
    request_body = CreateArticleData,
    responses(
        (status = 201, description = "Created", body = Article),
        (status = 400, description = "Missing field or bad image", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 502, description = "Image upload failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/articles")]
pub async fn create_article_handler(
    _admin: AdminUser,
    req: web::Json<CreateArticleData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.article.create.execute(req.into_inner()).await {
        Ok(article) => ApiResponse::created(article),

        Err(CreateArticleError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateArticleError::InvalidImage(msg)) => {
            warn!(error = %msg, "Rejected article image");
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(CreateArticleError::ImageUploadFailed(msg)) => {
            error!(error = %msg, "Article image upload failed");
            ApiResponse::bad_gateway("IMAGE_UPLOAD_FAILED", "Failed to upload image")
        }

        Err(CreateArticleError::RepositoryError(msg)) => {
            error!("Failed to create article: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
