use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The stored document as the admin dashboard edits it. No fallback to
/// bundled defaults here.
#[get("/api/admin/portfolio")]
pub async fn get_portfolio_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.get.execute().await {
        Ok(Some(document)) => ApiResponse::success(document),
        Ok(None) => ApiResponse::not_found(
            "PORTFOLIO_NOT_INITIALIZED",
            "Portfolio has not been initialized",
        ),
        Err(e) => {
            error!(error = %e, "Failed to load portfolio");
            ApiResponse::internal_error()
        }
    }
}
