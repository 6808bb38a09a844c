use async_trait::async_trait;

use crate::article::application::domain::article::Article;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stores a new article under a generated id and returns it with `id` set.
    async fn insert(&self, article: Article) -> Result<Article, ArticleRepositoryError>;

    /// Every stored article, in storage order.
    async fn list(&self) -> Result<Vec<Article>, ArticleRepositoryError>;

    /// `(id, slug)` of every stored child that carries a slug, readable as an article or not.
    async fn list_slugs(&self) -> Result<Vec<(String, String)>, ArticleRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, ArticleRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleRepositoryError>;

    /// Overwrites the whole record at `article.id`.
    async fn replace(&self, article: &Article) -> Result<(), ArticleRepositoryError>;

    /// Returns whether the article existed.
    async fn delete(&self, id: &str) -> Result<bool, ArticleRepositoryError>;
}
