use async_trait::async_trait;

use crate::article::application::domain::article::Article;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetArticlesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Which slice of the article collection to list. Every listing is newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleListFilter {
    /// Every article regardless of visibility (admin).
    All,
    /// Public articles, optionally narrowed to a category (`"all"` means none).
    Public { category: Option<String> },
    /// Every visibility within one category.
    ByCategory(String),
    /// Featured public articles.
    Featured,
}

#[async_trait]
pub trait GetArticlesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ArticleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Article>, GetArticlesError>;
}
