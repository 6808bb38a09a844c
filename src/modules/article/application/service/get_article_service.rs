use async_trait::async_trait;

use crate::article::application::domain::article::Article;
use crate::article::application::ports::incoming::use_cases::{GetArticleError, GetArticleUseCase};
use crate::article::application::ports::outgoing::article_repository::ArticleRepository;

pub struct GetArticleService<R>
where
    R: ArticleRepository,
{
    repository: R,
}

impl<R> GetArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetArticleUseCase for GetArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn by_id(&self, id: &str) -> Result<Article, GetArticleError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetArticleError::RepositoryError(e.to_string()))?
            .ok_or(GetArticleError::NotFound)
    }

    async fn by_slug(&self, slug: &str) -> Result<Article, GetArticleError> {
        self.repository
            .find_by_slug(slug)
            .await
            .map_err(|e| GetArticleError::RepositoryError(e.to_string()))?
            .ok_or(GetArticleError::NotFound)
    }
}
