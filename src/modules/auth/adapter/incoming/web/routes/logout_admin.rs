use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

use super::login_admin::session_cookie;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Admin logout
///
/// Clears the session cookie. Tokens are stateless, so a copied bearer token stays valid
/// until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Session cookie cleared", body = LogoutResponseBody))
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    let mut response: HttpResponse = ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    });

    let cookie = session_cookie(String::new(), 0, data.cookie_secure);
    if let Err(e) = response.add_removal_cookie(&cookie) {
        error!(error = %e, "Failed to clear session cookie");
        return ApiResponse::internal_error();
    }

    info!("Admin logged out");
    response
}
