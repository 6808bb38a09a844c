use actix_web::{get, web, Responder};
use tracing::error;

use crate::article::application::ports::incoming::use_cases::ArticleListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, DEFAULT_PER_PAGE};
use crate::AppState;

#[get("/api/articles/featured")]
pub async fn get_featured_articles_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.to_request(DEFAULT_PER_PAGE);

    match data.article.list.execute(ArticleListFilter::Featured, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list featured articles");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_only_public_featured() {
        let app_state = TestAppStateBuilder::default()
            .with_article_data(json!({
                "articles": {
                    "a": {"title": "A", "featured": true, "visibility": "public"},
                    "b": {"title": "B", "featured": true, "visibility": "draft"},
                    "c": {"title": "C", "featured": false, "visibility": "public"}
                }
            }))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_featured_articles_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/articles/featured")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;

        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "A");
    }
}
