use actix_web::{get, web, Responder};
use tracing::error;

use crate::article::application::ports::incoming::use_cases::GetArticleError;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/articles/{id}")]
pub async fn get_article_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.article.get.by_id(&id).await {
        Ok(article) => ApiResponse::success(article),
        Err(GetArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }
        Err(GetArticleError::RepositoryError(msg)) => {
            error!("Failed to load article {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
