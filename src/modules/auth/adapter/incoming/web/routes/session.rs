use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub uid: String,
    pub email: String,
    pub admin: bool,
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = SessionResponse),
        (status = 401, description = "No valid session"),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(SessionResponse {
        uid: admin.uid,
        email: admin.email,
        admin: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{test_token_provider, TestTokens};
    use actix_web::{http::StatusCode, test, web, App};

    #[actix_web::test]
    async fn test_session_reports_admin() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", TestTokens::admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "owner@example.com");
        assert_eq!(body["data"]["admin"], true);
    }

    #[actix_web::test]
    async fn test_session_without_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
