mod get_portfolio_service;
mod get_section_service;
mod initialize_portfolio_service;
mod update_section_service;

pub use get_portfolio_service::GetPortfolioService;
pub use get_section_service::GetSectionService;
pub use initialize_portfolio_service::InitializePortfolioService;
pub use update_section_service::UpdateSectionService;
