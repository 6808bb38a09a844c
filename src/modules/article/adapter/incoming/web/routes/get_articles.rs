use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::article::application::ports::incoming::use_cases::ArticleListFilter;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PER_PAGE};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminArticlesQuery {
    pub category: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl From<AdminArticlesQuery> for (ArticleListFilter, PageRequest) {
    fn from(q: AdminArticlesQuery) -> Self {
        let filter = match q.category {
            Some(category) if !category.trim().is_empty() => {
                ArticleListFilter::ByCategory(category)
            }
            _ => ArticleListFilter::All,
        };
        (filter, PageRequest::new(q.page, q.per_page, DEFAULT_PER_PAGE))
    }
}

/// Every article, drafts included, for the admin manager table.
#[get("/api/admin/articles")]
pub async fn get_articles_handler(
    _admin: AdminUser,
    query: web::Query<AdminArticlesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.article.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list articles");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, TestTokens};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[::core::prelude::v1::test]
    fn test_query_conversion() {
        let (filter, page): (ArticleListFilter, PageRequest) = AdminArticlesQuery {
            category: Some("rust".into()),
            page: 0,
            per_page: 0,
        }
        .into();

        assert_eq!(filter, ArticleListFilter::ByCategory("rust".into()));
        assert_eq!(page, PageRequest::new(1, DEFAULT_PER_PAGE, DEFAULT_PER_PAGE));
    }

    #[actix_web::test]
    async fn test_admin_sees_drafts() {
        let app_state = TestAppStateBuilder::default()
            .with_article_data(json!({
                "articles": {
                    "a": {"title": "A", "visibility": "public"},
                    "b": {"title": "B", "visibility": "draft"}
                }
            }))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_articles_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/articles")
            .insert_header(("Authorization", TestTokens::admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 2);
    }

    #[actix_web::test]
    async fn test_requires_admin() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_articles_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/articles").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
