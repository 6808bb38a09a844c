mod create_article;
mod delete_article;
mod get_article;
mod get_articles;
mod update_article;

pub use create_article::{CreateArticleError, CreateArticleUseCase};
pub use delete_article::{DeleteArticleError, DeleteArticleUseCase};
pub use get_article::{GetArticleError, GetArticleUseCase};
pub use get_articles::{ArticleListFilter, GetArticlesError, GetArticlesUseCase};
pub use update_article::{UpdateArticleError, UpdateArticleUseCase};
