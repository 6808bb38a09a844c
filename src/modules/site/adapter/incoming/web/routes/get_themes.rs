use actix_web::{get, Responder};

use crate::shared::api::ApiResponse;
use crate::site::application::domain::theme::ThemeDescriptor;

#[get("/api/site/themes")]
pub async fn get_themes_handler() -> impl Responder {
    ApiResponse::success(ThemeDescriptor::all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_lists_both_themes() {
        let app = test::init_service(App::new().service(get_themes_handler)).await;

        let req = test::TestRequest::get().uri("/api/site/themes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["name"], "modern");
        assert_eq!(body["data"][1]["name"], "retro");
        assert_eq!(body["data"][1]["cardStyle"], "panel");
    }
}
