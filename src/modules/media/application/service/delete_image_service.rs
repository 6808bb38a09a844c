use async_trait::async_trait;

use crate::media::application::ports::incoming::use_cases::{DeleteImageError, DeleteImageUseCase};
use crate::media::application::ports::outgoing::image_host::{ImageHost, ImageHostError};

pub struct DeleteImageService<H>
where
    H: ImageHost,
{
    image_host: H,
}

impl<H> DeleteImageService<H>
where
    H: ImageHost,
{
    pub fn new(image_host: H) -> Self {
        Self { image_host }
    }
}

#[async_trait]
impl<H> DeleteImageUseCase for DeleteImageService<H>
where
    H: ImageHost + Send + Sync,
{
    async fn execute(&self, public_id: &str) -> Result<(), DeleteImageError> {
        self.image_host
            .delete(public_id)
            .await
            .map_err(|e| match e {
                ImageHostError::Unsupported(msg) => DeleteImageError::Unsupported(msg),
                other => DeleteImageError::HostError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::entities::{ImageFile, UploadedImage};
    use crate::media::application::ports::outgoing::image_host::ProgressSink;

    struct MockImageHost {
        delete_result: Result<(), ImageHostError>,
    }

    #[async_trait]
    impl ImageHost for MockImageHost {
        async fn upload(
            &self,
            _file: ImageFile,
            _progress: ProgressSink,
        ) -> Result<UploadedImage, ImageHostError> {
            unimplemented!("not needed for delete tests")
        }

        async fn delete(&self, _public_id: &str) -> Result<(), ImageHostError> {
            self.delete_result.clone()
        }
    }

    #[tokio::test]
    async fn test_unsupported_is_passed_through() {
        let service = DeleteImageService::new(MockImageHost {
            delete_result: Err(ImageHostError::Unsupported("signed request required".into())),
        });

        assert_eq!(
            service.execute("abc").await,
            Err(DeleteImageError::Unsupported("signed request required".into()))
        );
    }

    #[tokio::test]
    async fn test_other_host_errors_are_wrapped() {
        let service = DeleteImageService::new(MockImageHost {
            delete_result: Err(ImageHostError::Network("timeout".into())),
        });

        assert!(matches!(
            service.execute("abc").await,
            Err(DeleteImageError::HostError(_))
        ));
    }
}
