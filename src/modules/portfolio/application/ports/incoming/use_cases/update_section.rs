use async_trait::async_trait;
use serde_json::Value;

use crate::portfolio::application::domain::section::{PortfolioSection, SectionData};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateSectionError {
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

/// Whole-section replace. No merge with what is stored: last writer wins.
#[async_trait]
pub trait UpdateSectionUseCase: Send + Sync {
    async fn execute(
        &self,
        section: PortfolioSection,
        value: Value,
    ) -> Result<SectionData, UpdateSectionError>;
}
