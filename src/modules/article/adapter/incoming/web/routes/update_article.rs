use actix_web::{patch, web, Responder};
use tracing::{error, warn};

use crate::article::application::domain::article::ArticlePatch;
use crate::article::application::ports::incoming::use_cases::UpdateArticleError;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/api/admin/articles/{id}")]
pub async fn update_article_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ArticlePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.article.update.execute(&id, req.into_inner()).await {
        Ok(article) => ApiResponse::success(article),

        Err(UpdateArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }

        Err(UpdateArticleError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateArticleError::InvalidImage(msg)) => {
            warn!(error = %msg, "Rejected article image");
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(UpdateArticleError::ImageUploadFailed(msg)) => {
            error!(error = %msg, "Article image upload failed");
            ApiResponse::bad_gateway("IMAGE_UPLOAD_FAILED", "Failed to upload image")
        }

        Err(UpdateArticleError::RepositoryError(msg)) => {
            error!("Failed to update article {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
