use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::section::PortfolioSection;
use crate::portfolio::application::ports::incoming::use_cases::GetSectionError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, DEFAULT_PER_PAGE};
use crate::AppState;

#[get("/api/admin/portfolio/{section}")]
pub async fn get_section_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section: PortfolioSection = match path.parse() {
        Ok(section) => section,
        Err(e) => return ApiResponse::not_found("SECTION_NOT_FOUND", &e.to_string()),
    };

    match data
        .portfolio
        .get_section
        .execute(section, query.to_request(DEFAULT_PER_PAGE))
        .await
    {
        Ok(content) => ApiResponse::success(content),
        Err(GetSectionError::NotFound) => {
            ApiResponse::not_found("SECTION_NOT_FOUND", "Section has no content yet")
        }
        Err(GetSectionError::RepositoryError(msg)) => {
            error!(section = %section, "Failed to load section: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
