use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::site::application::domain::layout::GRID_PER_PAGE;
use crate::site::application::ports::incoming::use_cases::ProjectGrid;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ProjectGridQuery {
    /// Tag to filter by; `all` or absent shows every project.
    pub tag: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

/// Project grid
#[utoipa::path(
    get,
    path = "/api/portfolio/projects",
    tag = "site",
    params(ProjectGridQuery),
    responses((status = 200, description = "Filtered page of projects", body = ProjectGrid))
)]
#[get("/api/portfolio/projects")]
pub async fn get_project_grid_handler(
    query: web::Query<ProjectGridQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ProjectGridQuery {
        tag,
        page,
        per_page,
    } = query.into_inner();

    match data
        .site
        .project_grid
        .execute(tag, PageRequest::new(page, per_page, GRID_PER_PAGE))
        .await
    {
        Ok(grid) => ApiResponse::success(grid),
        Err(e) => {
            error!(error = %e, "Failed to build project grid");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_filters_by_tag() {
        let app_state = TestAppStateBuilder::default()
            .with_portfolio_data(json!({
                "portfolio": {
                    "projects": [
                        {"id": "a", "title": "A", "description": "a", "tags": ["Rust"]},
                        {"id": "b", "title": "B", "description": "b", "tags": ["React"]}
                    ]
                }
            }))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_grid_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio/projects?tag=react")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["tags"], json!(["Rust", "React"]));
        assert_eq!(body["data"]["activeTag"], "react");
        assert_eq!(body["data"]["projects"]["total"], 1);
        assert_eq!(body["data"]["projects"]["items"][0]["id"], "b");
        assert_eq!(body["data"]["projects"]["per_page"], 6);
    }
}
