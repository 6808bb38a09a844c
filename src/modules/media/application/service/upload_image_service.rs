use async_trait::async_trait;
use tracing::{info, warn};

use crate::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::media::application::domain::policies::upload_policy::ImageUploadPolicy;
use crate::media::application::ports::incoming::use_cases::{UploadImageError, UploadImageUseCase};
use crate::media::application::ports::outgoing::image_host::{ImageHost, ProgressSink};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UploadImageService<H>
where
    H: ImageHost,
{
    image_host: H,
    policy: ImageUploadPolicy,
}

impl<H> UploadImageService<H>
where
    H: ImageHost,
{
    pub fn new(image_host: H, policy: ImageUploadPolicy) -> Self {
        Self { image_host, policy }
    }
}

#[async_trait]
impl<H> UploadImageUseCase for UploadImageService<H>
where
    H: ImageHost + Send + Sync,
{
    async fn execute(
        &self,
        file: ImageFile,
        progress: ProgressSink,
    ) -> Result<UploadedImage, UploadImageError> {
        self.policy
            .check_file(&file)
            .map_err(|e| UploadImageError::InvalidImage(e.to_string()))?;

        let file_name = file.file_name.clone();
        let size = file.size();

        match self.image_host.upload(file, progress).await {
            Ok(uploaded) => {
                info!(file_name = %file_name, size, public_id = %uploaded.public_id, "Image uploaded");
                Ok(uploaded)
            }
            Err(e) => {
                warn!(file_name = %file_name, size, error = %e, "Image upload failed");
                Err(UploadImageError::UploadFailed(e.to_string()))
            }
        }
    }
}
