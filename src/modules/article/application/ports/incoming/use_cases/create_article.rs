use async_trait::async_trait;

use crate::article::application::domain::article::{Article, CreateArticleData};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateArticleError {
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
pub trait CreateArticleUseCase: Send + Sync {
    async fn execute(&self, data: CreateArticleData) -> Result<Article, CreateArticleError>;
}
