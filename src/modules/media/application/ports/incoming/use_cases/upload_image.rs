use async_trait::async_trait;

use crate::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::media::application::ports::outgoing::image_host::ProgressSink;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadImageError {
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

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(
        &self,
        file: ImageFile,
        progress: ProgressSink,
    ) -> Result<UploadedImage, UploadImageError>;
}
