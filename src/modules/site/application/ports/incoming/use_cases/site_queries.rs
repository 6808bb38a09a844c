use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::application::domain::portfolio::{Achievement, Project};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::site::application::domain::dashboard::DashboardSummary;
use crate::site::application::domain::layout::SiteLayout;
use crate::site::application::domain::view::PortfolioView;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Results
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGrid {
    /// Every tag across all projects, for the filter bar.
    pub tags: Vec<String>,
    pub active_tag: Option<String>,
    #[schema(value_type = Object)]
    pub projects: PageResult<Project>,
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

/// Stored portfolio, or the bundled defaults when nothing is stored yet.
#[async_trait]
pub trait GetPortfolioViewUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioView, SiteError>;
}

#[async_trait]
pub trait GetProjectGridUseCase: Send + Sync {
    async fn execute(
        &self,
        tag: Option<String>,
        page: PageRequest,
    ) -> Result<ProjectGrid, SiteError>;
}

#[async_trait]
pub trait GetAchievementsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Achievement>, SiteError>;
}

#[async_trait]
pub trait GetSiteLayoutUseCase: Send + Sync {
    /// `theme` is a theme name; unknown names fail with `UnknownTheme`.
    async fn execute(&self, theme: &str) -> Result<SiteLayout, SiteError>;
}

#[async_trait]
pub trait GetDashboardSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSummary, SiteError>;
}
