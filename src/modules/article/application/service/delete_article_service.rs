use async_trait::async_trait;
use tracing::info;

use crate::article::application::ports::incoming::use_cases::{
    DeleteArticleError, DeleteArticleUseCase,
};
use crate::article::application::ports::outgoing::article_repository::ArticleRepository;

pub struct DeleteArticleService<R>
where
    R: ArticleRepository,
{
    repository: R,
}

impl<R> DeleteArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteArticleUseCase for DeleteArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<(), DeleteArticleError> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|e| DeleteArticleError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(DeleteArticleError::NotFound);
        }

        info!(article_id = %id, "Article deleted");
        Ok(())
    }
}
