use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::site::application::domain::layout::GRID_PER_PAGE;
use crate::AppState;

#[get("/api/portfolio/achievements")]
pub async fn get_achievements_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .site
        .achievements
        .execute(query.to_request(GRID_PER_PAGE))
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list achievements");
            ApiResponse::internal_error()
        }
    }
}
