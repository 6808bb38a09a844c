mod create_article;
mod delete_article;
mod get_article;
mod get_article_by_slug;
mod get_articles;
mod get_featured_articles;
mod get_public_articles;
mod update_article;

pub use create_article::create_article_handler;
pub use delete_article::delete_article_handler;
pub use get_article::get_article_handler;
pub use get_article_by_slug::get_article_by_slug_handler;
pub use get_articles::{get_articles_handler, AdminArticlesQuery};
pub use get_featured_articles::get_featured_articles_handler;
pub use get_public_articles::{get_public_articles_handler, PublicArticlesQuery, ARTICLES_PER_PAGE};
pub use update_article::update_article_handler;
pub use get_public_articles::__path_get_public_articles_handler;
pub use get_article_by_slug::__path_get_article_by_slug_handler;
pub use create_article::__path_create_article_handler;
