use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitImageError {
    #[error("{0}")]
    InvalidImage(String),

    #[error("Image upload failed: {0}")]
    UploadFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Resolves an image form field to the value that gets persisted.
///
/// A staged `data:` URL is validated, uploaded and replaced by the hosted URL.
/// Plain URLs come back trimmed, blanks come back empty.
#[async_trait]
pub trait CommitStagedImageUseCase: Send + Sync {
    async fn execute(&self, value: &str, file_stem: &str) -> Result<String, CommitImageError>;
}
