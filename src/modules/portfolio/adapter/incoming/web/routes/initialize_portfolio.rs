use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct InitializeQuery {
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    pub seeded: bool,
}

#[post("/api/admin/portfolio/initialize")]
pub async fn initialize_portfolio_handler(
    _admin: AdminUser,
    query: web::Query<InitializeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.initialize.execute(query.force).await {
        Ok(seeded) => ApiResponse::success(InitializeResponse { seeded }),
        Err(e) => {
            error!(error = %e, "Failed to initialize portfolio");
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

    #[actix_web::test]
    async fn test_seeds_then_reports_existing() {
        let app_state = TestAppStateBuilder::default()
            .with_portfolio_data(json!({}))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(initialize_portfolio_handler),
        )
        .await;

        let request = |uri: &str| {
            test::TestRequest::post()
                .uri(uri)
                .insert_header(("Authorization", TestTokens::admin_bearer()))
                .to_request()
        };

        let first: Value =
            test::call_and_read_body_json(&app, request("/api/admin/portfolio/initialize")).await;
        assert_eq!(first["data"]["seeded"], true);

        let second: Value =
            test::call_and_read_body_json(&app, request("/api/admin/portfolio/initialize")).await;
        assert_eq!(second["data"]["seeded"], false);

        let forced = test::call_service(
            &app,
            request("/api/admin/portfolio/initialize?force=true"),
        )
        .await;
        assert_eq!(forced.status(), StatusCode::OK);
        let forced: Value = test::read_body_json(forced).await;
        assert_eq!(forced["data"]["seeded"], true);
    }
}
