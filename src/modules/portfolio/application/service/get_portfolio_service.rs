use async_trait::async_trait;

use crate::portfolio::application::domain::portfolio::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;

pub struct GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for GetPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<PortfolioDocument>, GetPortfolioError> {
        self.repository
            .load()
            .await
            .map_err(|e| GetPortfolioError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_store::ContentStoreMemory;
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_uninitialised_is_none() {
        let service = GetPortfolioService::new(PortfolioRepositoryStore::new(Arc::new(
            ContentStoreMemory::new(),
        )));

        assert_eq!(service.execute().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_returns_document() {
        let service = GetPortfolioService::new(PortfolioRepositoryStore::new(Arc::new(
            ContentStoreMemory::with_data(json!({
                "portfolio": {"skills": {"categories": [{"name": "Rust", "items": ["tokio"]}]}}
            })),
        )));

        let doc = service.execute().await.unwrap().unwrap();
        assert_eq!(doc.skills.categories[0].items, vec!["tokio".to_string()]);
    }
}
