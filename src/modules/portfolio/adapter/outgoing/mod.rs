mod portfolio_repository_store;

pub use portfolio_repository_store::{PortfolioRepositoryStore, PORTFOLIO_ROOT};
