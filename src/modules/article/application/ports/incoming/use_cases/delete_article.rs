use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteArticleUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteArticleError>;
}
