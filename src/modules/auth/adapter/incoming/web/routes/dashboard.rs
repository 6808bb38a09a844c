use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::{debug, error};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Where visitors without an admin session are sent.
pub const LOGIN_PATH: &str = "/login";

/// Protected admin panel
///
/// Redirects to the login page without an admin session; otherwise returns per-entity counts
/// for the dashboard landing view.
#[utoipa::path(
    get,
    path = "/dashboard-secure-panel",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard summary"),
        (status = 303, description = "No admin session, redirect to /login"),
    )
)]
#[get("/dashboard-secure-panel")]
pub async fn dashboard_handler(
    admin: Option<AdminUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(admin) = admin else {
        debug!("Dashboard requested without admin session");
        return HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LOGIN_PATH))
            .finish();
    };

    match data.site.dashboard_summary.execute().await {
        Ok(summary) => {
            debug!(uid = %admin.uid, "Dashboard summary served");
            ApiResponse::success(summary)
        }
        Err(e) => {
            error!(error = %e, "Failed to build dashboard summary");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, TestTokens};
    use crate::tests::support::stubs::StubDashboardSummary;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_redirects_to_login_without_session() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard-secure-panel")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_redirects_with_invalid_token() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard-secure-panel")
            .insert_header(("Authorization", "Bearer forged"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_admin_gets_summary() {
        let app_state = TestAppStateBuilder::default()
            .with_dashboard_summary(StubDashboardSummary::with_articles(3))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/dashboard-secure-panel")
            .insert_header(("Authorization", TestTokens::admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["articles"]["total"], 3);
    }
}
