use actix_web::{delete, http::StatusCode, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::media::application::ports::incoming::use_cases::DeleteImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a hosted image
///
/// Deleting from the CDN needs a signed request, which this service does not hold
/// credentials for, so the host currently answers 501.
#[utoipa::path(
    delete,
    path = "/api/media/images/{public_id}",
    tag = "media",
    security(("bearer_auth" = [])),
    params(("public_id" = String, Path, description = "CDN public id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 501, description = "Host cannot delete", body = ErrorResponse),
    )
)]
#[delete("/api/media/images/{public_id}")]
pub async fn delete_image_handler(
    admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let public_id = path.into_inner();
    info!(uid = %admin.uid, public_id = %public_id, "Image delete requested");

    match data.media.delete.execute(&public_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteImageError::Unsupported(msg)) => {
            ApiResponse::error(StatusCode::NOT_IMPLEMENTED, "NOT_SUPPORTED", &msg)
        }
        Err(DeleteImageError::HostError(msg)) => {
            error!(error = %msg, "Image delete failed");
            ApiResponse::bad_gateway("IMAGE_DELETE_FAILED", "Failed to delete image")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_token_provider, TestTokens};
    use crate::tests::support::stubs::StubDeleteImage;
    use actix_web::{test, App};

    async fn call(stub: StubDeleteImage) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_delete_image(stub)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_image_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/media/images/portfolio_abc")
            .insert_header(("Authorization", TestTokens::admin_bearer()))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_unsupported_is_not_implemented() {
        let resp = call(StubDeleteImage::failing(DeleteImageError::Unsupported(
            "Image deletion requires a signed request".into(),
        )))
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[actix_web::test]
    async fn test_deleted() {
        let resp = call(StubDeleteImage::ok()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
