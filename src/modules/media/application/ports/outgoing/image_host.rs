use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::domain::entities::{ImageFile, UploadProgress, UploadedImage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageHostError {
    #[error("Upload failed with status {status}")]
    UploadFailed { status: u16 },

    #[error("Invalid upload request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from image host: {0}")]
    InvalidResponse(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Receives progress while an upload body is being sent.
pub type ProgressSink = Arc<dyn Fn(UploadProgress) + Send + Sync>;

pub fn no_progress() -> ProgressSink {
    Arc::new(|_| {})
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(
        &self,
        file: ImageFile,
        progress: ProgressSink,
    ) -> Result<UploadedImage, ImageHostError>;

    async fn delete(&self, public_id: &str) -> Result<(), ImageHostError>;
}
