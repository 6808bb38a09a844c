use std::sync::Arc;

use crate::media::application::domain::policies::upload_policy::ImageUploadPolicy;
use crate::media::application::ports::incoming::use_cases::{
    CommitStagedImageUseCase, DeleteImageUseCase, UploadImageUseCase,
};

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadImageUseCase + Send + Sync>,
    pub commit_staged: Arc<dyn CommitStagedImageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteImageUseCase + Send + Sync>,
    pub policy: ImageUploadPolicy,
}
