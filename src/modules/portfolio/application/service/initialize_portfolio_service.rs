use async_trait::async_trait;
use tracing::info;

use crate::portfolio::application::domain::defaults::default_portfolio;
use crate::portfolio::application::ports::incoming::use_cases::{
    InitializePortfolioError, InitializePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;

pub struct InitializePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> InitializePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> InitializePortfolioUseCase for InitializePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, force: bool) -> Result<bool, InitializePortfolioError> {
        if !force {
            let existing = self
                .repository
                .load()
                .await
                .map_err(|e| InitializePortfolioError::RepositoryError(e.to_string()))?;

            if existing.is_some() {
                return Ok(false);
            }
        }

        let defaults =
            default_portfolio().map_err(|e| InitializePortfolioError::Defaults(e.to_string()))?;

        self.repository
            .save(&defaults)
            .await
            .map_err(|e| InitializePortfolioError::RepositoryError(e.to_string()))?;

        info!(force, "Portfolio seeded from bundled defaults");
        Ok(true)
    }
}
