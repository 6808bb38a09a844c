use async_trait::async_trait;
use std::sync::Arc;

use crate::article::application::ports::outgoing::article_repository::ArticleRepository;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::site::application::domain::dashboard::DashboardSummary;
use crate::site::application::ports::incoming::use_cases::{
    GetDashboardSummaryUseCase, SiteError,
};

pub struct DashboardSummaryService<A>
where
    A: ArticleRepository,
{
    portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    articles: A,
}

impl<A> DashboardSummaryService<A>
where
    A: ArticleRepository,
{
    pub fn new(portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>, articles: A) -> Self {
        Self {
            portfolio,
            articles,
        }
    }
}

#[async_trait]
impl<A> GetDashboardSummaryUseCase for DashboardSummaryService<A>
where
    A: ArticleRepository + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardSummary, SiteError> {
        let portfolio = self
            .portfolio
            .execute()
            .await
            .map_err(|e| SiteError::RepositoryError(e.to_string()))?;

        let articles = self
            .articles
            .list()
            .await
            .map_err(|e| SiteError::RepositoryError(e.to_string()))?;

        Ok(DashboardSummary::new(portfolio.as_ref(), &articles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::adapter::outgoing::ArticleRepositoryStore;
    use crate::content_store::{ContentStoreMemory, SharedContentStore};
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use crate::portfolio::application::service::GetPortfolioService;
    use serde_json::json;

    #[tokio::test]
    async fn test_summary_counts() {
        let store: SharedContentStore = Arc::new(ContentStoreMemory::with_data(json!({
            "portfolio": {
                "projects": [{"id": "p1", "title": "a", "description": "b"}],
                "skills": {"categories": [{"name": "Rust"}, {"name": "Go"}]}
            },
            "articles": {
                "a1": {"title": "x", "visibility": "public"},
                "a2": {"title": "y"}
            }
        })));

        let service = DashboardSummaryService::new(
            Arc::new(GetPortfolioService::new(PortfolioRepositoryStore::new(
                store.clone(),
            ))),
            ArticleRepositoryStore::new(store),
        );

        let summary = service.execute().await.unwrap();

        assert!(summary.portfolio_initialized);
        assert_eq!(summary.projects, 1);
        assert_eq!(summary.skill_categories, 2);
        assert_eq!(summary.articles.total, 2);
        assert_eq!(summary.articles.public, 1);
        assert_eq!(summary.articles.draft, 1);
    }
}
