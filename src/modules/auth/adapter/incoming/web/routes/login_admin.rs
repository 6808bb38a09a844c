use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::ADMIN_SESSION_COOKIE;
use crate::auth::application::use_cases::login_admin::{LoginAdminError, LoginAdminRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin credentials
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub uid: String,
    pub email: String,

    /// Same token as the `admin_session` cookie, for bearer clients.
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Seconds until the token expires
    #[schema(example = 28800)]
    pub expires_in: i64,
}

pub(super) fn session_cookie(value: String, max_age: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(ADMIN_SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::seconds(max_age))
        .finish()
}

/// Admin login
///
/// Signs in through the identity provider and opens an admin session. Any account other
/// than the configured admin is signed out again and rejected.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 401,
            description = "Bad credentials or not the admin account",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UNAUTHORIZED",
                    "message": "Unauthorized access. Only admin can access this area."
                }
            })
        ),
        (status = 503, description = "Identity provider unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Admin login attempt");

    let request = match LoginAdminRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin.execute(request).await {
        Ok(session) => {
            let cookie = session_cookie(
                session.access_token.clone(),
                session.expires_in,
                data.cookie_secure,
            );

            let mut response: HttpResponse = ApiResponse::success(LoginResponse {
                uid: session.uid,
                email: session.email,
                access_token: session.access_token,
                expires_in: session.expires_in,
            });

            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            response
        }

        Err(LoginAdminError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e @ LoginAdminError::NotAdmin) => {
            warn!("Admin login failed: not the admin account");
            ApiResponse::unauthorized("UNAUTHORIZED", &e.to_string())
        }

        Err(LoginAdminError::ProviderUnavailable(ref e)) => {
            error!(error = %e, "Identity provider unavailable");
            ApiResponse::service_unavailable(
                "AUTH_PROVIDER_UNAVAILABLE",
                "Sign-in is temporarily unavailable",
            )
        }

        Err(LoginAdminError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
