use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::article::application::ports::incoming::use_cases::{
    ArticleListFilter, GetArticlesError,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

/// Cards per page on the public articles grid.
pub const ARTICLES_PER_PAGE: u32 = 6;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct PublicArticlesQuery {
    /// Category key; `all` or omitted lists every category
    pub category: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

/// Public articles
///
/// Newest first, public visibility only.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    params(PublicArticlesQuery),
    responses(
        (status = 200, description = "One page of public articles"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/articles")]
pub async fn get_public_articles_handler(
    query: web::Query<PublicArticlesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, ARTICLES_PER_PAGE);
    let filter = ArticleListFilter::Public {
        category: query.category,
    };

    match data.article.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(GetArticlesError::RepositoryError(msg)) => {
            error!("Failed to list public articles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
