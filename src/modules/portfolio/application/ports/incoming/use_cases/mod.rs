mod get_portfolio;
mod get_section;
mod initialize_portfolio;
mod update_section;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_section::{GetSectionError, GetSectionUseCase, SectionContent};
pub use initialize_portfolio::{InitializePortfolioError, InitializePortfolioUseCase};
pub use update_section::{UpdateSectionError, UpdateSectionUseCase};
