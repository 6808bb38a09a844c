use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::site::application::domain::layout::SiteLayout;
use crate::site::application::domain::theme::ThemeName;
use crate::site::application::ports::incoming::use_cases::SiteError;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LayoutQuery {
    /// `modern` (default) or `retro`.
    pub theme: Option<String>,
}

/// Section layout for a theme
#[utoipa::path(
    get,
    path = "/api/site/layout",
    tag = "site",
    params(LayoutQuery),
    responses(
        (status = 200, description = "Ordered sections with their data", body = SiteLayout),
        (status = 400, description = "Unknown theme", body = ErrorResponse),
    )
)]
#[get("/api/site/layout")]
pub async fn get_site_layout_handler(
    query: web::Query<LayoutQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let theme = query
        .theme
        .as_deref()
        .unwrap_or(ThemeName::Modern.as_str());

    match data.site.layout.execute(theme).await {
        Ok(layout) => ApiResponse::success(layout),
        Err(SiteError::UnknownTheme(name)) => {
            ApiResponse::bad_request("UNKNOWN_THEME", &format!("Unknown theme '{}'", name))
        }
        Err(e) => {
            error!(error = %e, theme, "Failed to build site layout");
            ApiResponse::internal_error()
        }
    }
}
