use async_trait::async_trait;

use crate::article::application::domain::article::Article;
use crate::article::application::domain::filters::{featured, in_category, newest_first, public_only};
use crate::article::application::ports::incoming::use_cases::{
    ArticleListFilter, GetArticlesError, GetArticlesUseCase,
};
use crate::article::application::ports::outgoing::article_repository::ArticleRepository;
use crate::shared::pagination::{paginate, PageRequest, PageResult};

pub struct GetArticlesService<R>
where
    R: ArticleRepository,
{
    repository: R,
}

impl<R> GetArticlesService<R>
where
    R: ArticleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetArticlesUseCase for GetArticlesService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: ArticleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Article>, GetArticlesError> {
        let all = self
            .repository
            .list()
            .await
            .map_err(|e| GetArticlesError::RepositoryError(e.to_string()))?;

        let selected = match filter {
            ArticleListFilter::All => all,
            ArticleListFilter::Public { category } => {
                in_category(public_only(all), category.as_deref())
            }
            ArticleListFilter::ByCategory(category) => in_category(all, Some(&category)),
            ArticleListFilter::Featured => featured(all),
        };

        Ok(paginate(newest_first(selected), page))
    }
}
