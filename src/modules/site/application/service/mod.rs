mod dashboard_summary_service;
mod portfolio_view_service;
mod project_grid_service;
mod site_layout_service;

pub use dashboard_summary_service::DashboardSummaryService;
pub use portfolio_view_service::PortfolioViewService;
pub use project_grid_service::{AchievementsService, ProjectGridService};
pub use site_layout_service::SiteLayoutService;
