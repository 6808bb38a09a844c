use async_trait::async_trait;
use tracing::debug;

use crate::media::application::domain::entities::UploadProgress;
use crate::media::application::domain::policies::upload_policy::ImageUploadPolicy;
use crate::media::application::domain::staged_image::ImageSource;
use crate::media::application::ports::incoming::use_cases::{
    CommitImageError, CommitStagedImageUseCase,
};
use crate::media::application::ports::outgoing::image_host::{ImageHost, ProgressSink};

pub struct CommitStagedImageService<H>
where
    H: ImageHost,
{
    image_host: H,
    policy: ImageUploadPolicy,
}

impl<H> CommitStagedImageService<H>
where
    H: ImageHost,
{
    pub fn new(image_host: H, policy: ImageUploadPolicy) -> Self {
        Self { image_host, policy }
    }
}

#[async_trait]
impl<H> CommitStagedImageUseCase for CommitStagedImageService<H>
where
    H: ImageHost + Send + Sync,
{
    async fn execute(&self, value: &str, file_stem: &str) -> Result<String, CommitImageError> {
        let file = match ImageSource::parse(value, file_stem)
            .map_err(|e| CommitImageError::InvalidImage(e.to_string()))?
        {
            ImageSource::Empty => return Ok(String::new()),
            ImageSource::Url(url) => return Ok(url),
            ImageSource::Staged(file) => file,
        };

        self.policy
            .check_file(&file)
            .map_err(|e| CommitImageError::InvalidImage(e.to_string()))?;

        let name = file.file_name.clone();
        let progress: ProgressSink = std::sync::Arc::new(move |p: UploadProgress| {
            debug!(file_name = %name, percent = p.percent(), "Staged image upload progress");
        });

        let uploaded = self
            .image_host
            .upload(file, progress)
            .await
            .map_err(|e| CommitImageError::UploadFailed(e.to_string()))?;

        Ok(uploaded.url)
    }
}
