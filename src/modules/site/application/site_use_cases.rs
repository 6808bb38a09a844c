use std::sync::Arc;

use crate::site::application::ports::incoming::use_cases::{
    GetAchievementsUseCase, GetDashboardSummaryUseCase, GetPortfolioViewUseCase,
    GetProjectGridUseCase, GetSiteLayoutUseCase,
};

#[derive(Clone)]
pub struct SiteUseCases {
    pub portfolio_view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
    pub project_grid: Arc<dyn GetProjectGridUseCase + Send + Sync>,
    pub achievements: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    pub layout: Arc<dyn GetSiteLayoutUseCase + Send + Sync>,
    pub dashboard_summary: Arc<dyn GetDashboardSummaryUseCase + Send + Sync>,
}
