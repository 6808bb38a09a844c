mod site_queries;

pub use site_queries::{
    GetAchievementsUseCase, GetDashboardSummaryUseCase, GetPortfolioViewUseCase,
    GetProjectGridUseCase, GetSiteLayoutUseCase, ProjectGrid, SiteError,
};
