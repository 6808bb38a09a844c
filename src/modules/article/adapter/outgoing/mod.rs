mod article_repository_store;

pub use article_repository_store::{ArticleRepositoryStore, ARTICLES_ROOT};
