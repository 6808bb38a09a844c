use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::domain::portfolio::Achievement;
use crate::shared::pagination::{paginate, PageRequest, PageResult};
use crate::site::application::domain::view::{filter_by_tag, tag_cloud};
use crate::site::application::ports::incoming::use_cases::{
    GetAchievementsUseCase, GetPortfolioViewUseCase, GetProjectGridUseCase, ProjectGrid,
    SiteError,
};

pub struct ProjectGridService {
    view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
}

impl ProjectGridService {
    pub fn new(view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>) -> Self {
        Self { view }
    }
}

#[async_trait]
impl GetProjectGridUseCase for ProjectGridService {
    async fn execute(
        &self,
        tag: Option<String>,
        page: PageRequest,
    ) -> Result<ProjectGrid, SiteError> {
        let projects = self.view.execute().await?.portfolio.projects;
        let tags = tag_cloud(&projects);

        let active_tag = tag
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("all"));

        Ok(ProjectGrid {
            tags,
            projects: paginate(filter_by_tag(projects, active_tag.as_deref()), page),
            active_tag,
        })
    }
}

pub struct AchievementsService {
    view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
}

impl AchievementsService {
    pub fn new(view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>) -> Self {
        Self { view }
    }
}

#[async_trait]
impl GetAchievementsUseCase for AchievementsService {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Achievement>, SiteError> {
        let achievements = self.view.execute().await?.portfolio.achievements;
        Ok(paginate(achievements, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_store::ContentStoreMemory;
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use crate::portfolio::application::service::GetPortfolioService;
    use crate::site::application::domain::layout::GRID_PER_PAGE;
    use crate::site::application::service::PortfolioViewService;
    use serde_json::{json, Value};

    fn view(data: Value) -> Arc<dyn GetPortfolioViewUseCase + Send + Sync> {
        Arc::new(PortfolioViewService::new(Arc::new(GetPortfolioService::new(
            PortfolioRepositoryStore::new(Arc::new(ContentStoreMemory::with_data(data))),
        ))))
    }

    fn projects(n: usize) -> Value {
        let items: Vec<Value> = (0..n)
            .map(|i| {
                let tag = if i % 2 == 0 { "Rust" } else { "Go" };
                json!({"id": format!("p{}", i), "title": "t", "description": "d", "tags": [tag]})
            })
            .collect();
        json!({"portfolio": {"projects": items}})
    }

    #[tokio::test]
    async fn test_tag_filter_then_paginate() {
        let service = ProjectGridService::new(view(projects(9)));

        let grid = service
            .execute(Some("rust".into()), PageRequest::new(1, 0, GRID_PER_PAGE))
            .await
            .unwrap();

        assert_eq!(grid.tags, vec!["Rust", "Go"]);
        assert_eq!(grid.active_tag.as_deref(), Some("rust"));
        assert_eq!(grid.projects.total, 5);
        assert_eq!(grid.projects.items.len(), 5);
    }

    #[tokio::test]
    async fn test_all_tag_pages_everything() {
        let service = ProjectGridService::new(view(projects(9)));

        let grid = service
            .execute(Some("all".into()), PageRequest::new(2, 0, GRID_PER_PAGE))
            .await
            .unwrap();

        assert_eq!(grid.active_tag, None);
        assert_eq!(grid.projects.total_pages, 2);
        assert_eq!(grid.projects.items.len(), 3);
    }

    #[tokio::test]
    async fn test_achievements_page() {
        let items: Vec<Value> = (0..13)
            .map(|i| json!({"id": format!("a{}", i), "title": "x"}))
            .collect();
        let service = AchievementsService::new(view(json!({"portfolio": {"achievements": items}})));

        let page = service
            .execute(PageRequest::new(3, 0, GRID_PER_PAGE))
            .await
            .unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a12");
    }
}
