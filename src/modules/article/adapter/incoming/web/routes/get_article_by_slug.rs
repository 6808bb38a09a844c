use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::article::application::domain::article::Article;
use crate::article::application::ports::incoming::use_cases::GetArticleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Article permalink
///
/// Drafts and private articles answer 404 just like unknown slugs.
#[utoipa::path(
    get,
    path = "/api/articles/slug/{slug}",
    tag = "articles",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 404, description = "No public article with that slug", body = ErrorResponse),
    )
)]
#[get("/api/articles/slug/{slug}")]
pub async fn get_article_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.article.get.by_slug(&slug).await {
        Ok(article) if article.is_public() => ApiResponse::success(article),
        Ok(_) | Err(GetArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }
        Err(GetArticleError::RepositoryError(msg)) => {
            error!("Failed to load article by slug {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
