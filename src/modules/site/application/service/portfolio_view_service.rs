use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::portfolio::application::domain::defaults::default_portfolio;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::site::application::domain::view::{PortfolioView, ViewSource};
use crate::site::application::ports::incoming::use_cases::{GetPortfolioViewUseCase, SiteError};

pub struct PortfolioViewService {
    portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
}

impl PortfolioViewService {
    pub fn new(portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>) -> Self {
        Self { portfolio }
    }
}

#[async_trait]
impl GetPortfolioViewUseCase for PortfolioViewService {
    async fn execute(&self) -> Result<PortfolioView, SiteError> {
        let stored = self
            .portfolio
            .execute()
            .await
            .map_err(|e| SiteError::RepositoryError(e.to_string()))?;

        match stored {
            Some(portfolio) => Ok(PortfolioView {
                source: ViewSource::Store,
                portfolio,
            }),
            None => {
                debug!("Portfolio not initialised; serving bundled defaults");
                let portfolio =
                    default_portfolio().map_err(|e| SiteError::RepositoryError(e.to_string()))?;
                Ok(PortfolioView {
                    source: ViewSource::Defaults,
                    portfolio,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_store::ContentStoreMemory;
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use crate::portfolio::application::service::GetPortfolioService;
    use serde_json::{json, Value};

    fn service(data: Value) -> PortfolioViewService {
        PortfolioViewService::new(Arc::new(GetPortfolioService::new(
            PortfolioRepositoryStore::new(Arc::new(ContentStoreMemory::with_data(data))),
        )))
    }

    #[tokio::test]
    async fn test_falls_back_to_defaults() {
        let view = service(json!({})).execute().await.unwrap();

        assert_eq!(view.source, ViewSource::Defaults);
        assert_eq!(view.portfolio, default_portfolio().unwrap());
    }

    #[tokio::test]
    async fn test_prefers_store() {
        let view = service(json!({"portfolio": {"personalInfo": {"name": "Ada"}}}))
            .execute()
            .await
            .unwrap();

        assert_eq!(view.source, ViewSource::Store);
        assert_eq!(view.portfolio.personal_info.name, "Ada");
        assert!(view.portfolio.projects.is_empty());
    }
}
