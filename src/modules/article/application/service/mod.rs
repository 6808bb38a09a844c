mod create_article_service;
mod delete_article_service;
mod get_article_service;
mod get_articles_service;
mod update_article_service;

pub use create_article_service::{CreateArticleService, FALLBACK_SLUG};
pub use delete_article_service::DeleteArticleService;
pub use get_article_service::GetArticleService;
pub use get_articles_service::GetArticlesService;
pub use update_article_service::UpdateArticleService;
