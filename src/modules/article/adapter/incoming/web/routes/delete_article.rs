use actix_web::{delete, web, Responder};
use tracing::error;

use crate::article::application::ports::incoming::use_cases::DeleteArticleError;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/articles/{id}")]
pub async fn delete_article_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.article.delete.execute(&id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }
        Err(DeleteArticleError::RepositoryError(msg)) => {
            error!("Failed to delete article {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
