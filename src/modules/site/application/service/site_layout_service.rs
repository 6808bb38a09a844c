use async_trait::async_trait;
use std::sync::Arc;

use crate::article::application::ports::incoming::use_cases::{
    ArticleListFilter, GetArticlesUseCase,
};
use crate::shared::pagination::PageRequest;
use crate::site::application::domain::layout::{SiteLayout, GRID_PER_PAGE};
use crate::site::application::domain::theme::{ThemeDescriptor, ThemeName};
use crate::site::application::ports::incoming::use_cases::{
    GetPortfolioViewUseCase, GetSiteLayoutUseCase, SiteError,
};

pub struct SiteLayoutService {
    view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
    articles: Arc<dyn GetArticlesUseCase + Send + Sync>,
}

impl SiteLayoutService {
    pub fn new(
        view: Arc<dyn GetPortfolioViewUseCase + Send + Sync>,
        articles: Arc<dyn GetArticlesUseCase + Send + Sync>,
    ) -> Self {
        Self { view, articles }
    }
}

#[async_trait]
impl GetSiteLayoutUseCase for SiteLayoutService {
    async fn execute(&self, theme: &str) -> Result<SiteLayout, SiteError> {
        let name: ThemeName = theme
            .parse()
            .map_err(|_| SiteError::UnknownTheme(theme.to_string()))?;

        let view = self.view.execute().await?;

        let articles = self
            .articles
            .execute(
                ArticleListFilter::Public { category: None },
                PageRequest::new(1, GRID_PER_PAGE, GRID_PER_PAGE),
            )
            .await
            .map_err(|e| SiteError::RepositoryError(e.to_string()))?;

        SiteLayout::build(ThemeDescriptor::for_theme(name), view, articles)
            .map_err(|e| SiteError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::adapter::outgoing::ArticleRepositoryStore;
    use crate::article::application::service::GetArticlesService;
    use crate::content_store::{ContentStoreMemory, SharedContentStore};
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use crate::portfolio::application::service::GetPortfolioService;
    use crate::site::application::domain::theme::SiteSection;
    use crate::site::application::service::PortfolioViewService;
    use serde_json::json;

    fn service() -> SiteLayoutService {
        let store: SharedContentStore = Arc::new(ContentStoreMemory::with_data(json!({
            "articles": {
                "a1": {"title": "Live", "visibility": "public", "date": "2024-01-02T00:00:00Z"},
                "a2": {"title": "Hidden", "visibility": "draft", "date": "2024-01-03T00:00:00Z"}
            }
        })));

        let view = Arc::new(PortfolioViewService::new(Arc::new(GetPortfolioService::new(
            PortfolioRepositoryStore::new(store.clone()),
        ))));
        let articles = Arc::new(GetArticlesService::new(ArticleRepositoryStore::new(store)));

        SiteLayoutService::new(view, articles)
    }

    #[tokio::test]
    async fn test_layout_lists_only_public_articles() {
        let layout = service().execute("modern").await.unwrap();

        let articles = layout
            .sections
            .iter()
            .find(|s| s.section == SiteSection::Articles)
            .unwrap();
        assert_eq!(articles.data["total"], 1);
        assert_eq!(articles.data["items"][0]["title"], "Live");
    }

    #[tokio::test]
    async fn test_unknown_theme() {
        assert_eq!(
            service().execute("vaporwave").await.unwrap_err(),
            SiteError::UnknownTheme("vaporwave".into())
        );
    }
}
