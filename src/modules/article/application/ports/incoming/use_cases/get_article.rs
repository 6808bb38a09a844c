use async_trait::async_trait;

use crate::article::application::domain::article::Article;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetArticleUseCase: Send + Sync {
    async fn by_id(&self, id: &str) -> Result<Article, GetArticleError>;

    /// Any visibility; callers serving visitors check `is_public` themselves.
    async fn by_slug(&self, slug: &str) -> Result<Article, GetArticleError>;
}
