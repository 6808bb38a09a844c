use async_trait::async_trait;

use crate::portfolio::application::domain::portfolio::PortfolioDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<PortfolioDocument>, GetPortfolioError>;
}
