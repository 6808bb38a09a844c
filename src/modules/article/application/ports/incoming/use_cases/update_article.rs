use async_trait::async_trait;

use crate::article::application::domain::article::{Article, ArticlePatch};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidImage(String),

    #[error("Image upload failed: {0}")]
    ImageUploadFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateArticleUseCase: Send + Sync {
    async fn execute(&self, id: &str, patch: ArticlePatch) -> Result<Article, UpdateArticleError>;
}
