use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::site::application::domain::view::PortfolioView;
use crate::AppState;

/// Public portfolio content
///
/// Falls back to the bundled defaults (`source: defaults`) until the admin has
/// saved anything.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "site",
    responses(
        (status = 200, description = "Portfolio", body = PortfolioView),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_view_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site.portfolio_view.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            error!(error = %e, "Failed to build portfolio view");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_defaults_then_store() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_view_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["source"], "defaults");

        let app_state = TestAppStateBuilder::default()
            .with_portfolio_data(json!({"portfolio": {"personalInfo": {"name": "Ada"}}}))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_view_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["source"], "store");
        assert_eq!(body["data"]["personalInfo"]["name"], "Ada");
    }
}
