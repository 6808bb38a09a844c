use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::media::application::ports::incoming::use_cases::{
    CommitImageError, CommitStagedImageUseCase,
};
use crate::portfolio::application::domain::section::{PortfolioSection, SectionData};
use crate::portfolio::application::ports::incoming::use_cases::{
    UpdateSectionError, UpdateSectionUseCase,
};
use crate::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;

pub struct UpdateSectionService<R>
where
    R: PortfolioRepository,
{
    repository: R,
    images: Arc<dyn CommitStagedImageUseCase + Send + Sync>,
}

impl<R> UpdateSectionService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R, images: Arc<dyn CommitStagedImageUseCase + Send + Sync>) -> Self {
        Self { repository, images }
    }

    /// Uploads staged images in place. Blank values become `None`.
    async fn commit_images(
        &self,
        data: &mut SectionData,
    ) -> Result<(), UpdateSectionError> {
        let section = data.section();

        for (index, field) in data.image_fields_mut().into_iter().enumerate() {
            let Some(raw) = field.as_deref() else {
                continue;
            };

            let stem = format!("{}-{}", section.key().to_lowercase(), index);
            let committed = self
                .images
                .execute(raw, &stem)
                .await
                .map_err(|e| match e {
                    CommitImageError::InvalidImage(msg) => UpdateSectionError::InvalidImage(msg),
                    CommitImageError::UploadFailed(msg) => {
                        UpdateSectionError::ImageUploadFailed(msg)
                    }
                })?;

            *field = Some(committed).filter(|url| !url.is_empty());
        }

        Ok(())
    }
}

#[async_trait]
impl<R> UpdateSectionUseCase for UpdateSectionService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        section: PortfolioSection,
        value: Value,
    ) -> Result<SectionData, UpdateSectionError> {
        let mut data = SectionData::from_json(section, value)
            .map_err(|e| UpdateSectionError::Validation(e.to_string()))?;

        data.validate()
            .map_err(|e| UpdateSectionError::Validation(e.to_string()))?;

        self.commit_images(&mut data).await?;

        self.repository
            .save_section(&data)
            .await
            .map_err(|e| UpdateSectionError::RepositoryError(e.to_string()))?;

        info!(section = %section, records = ?data.len(), "Portfolio section saved");
        Ok(data)
    }
}
