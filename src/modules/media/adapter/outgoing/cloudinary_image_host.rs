use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::config::{optional, required, ConfigError};
use crate::media::application::domain::entities::{ImageFile, UploadProgress, UploadedImage};
use crate::media::application::ports::outgoing::image_host::{
    ImageHost, ImageHostError, ProgressSink,
};

/// Bytes per body chunk; progress is reported once per chunk.
const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub api_base: String,
}

impl CloudinaryConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.cloudinary.com/v1_1";

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            upload_preset: required("CLOUDINARY_UPLOAD_PRESET")?,
            api_base: optional("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| Self::DEFAULT_API_BASE.to_string()),
        })
    }

    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
    public_id: String,
}

/// Unsigned uploads through a Cloudinary upload preset.
#[derive(Clone)]
pub struct CloudinaryImageHost {
    config: CloudinaryConfig,
    client: Client,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn progress_body(bytes: Vec<u8>, progress: ProgressSink) -> Body {
        let total = bytes.len() as u64;
        let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();

        progress(UploadProgress { loaded: 0, total });

        let mut loaded = 0u64;
        let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
            loaded += chunk.len() as u64;
            progress(UploadProgress { loaded, total });
            Ok::<Vec<u8>, std::io::Error>(chunk)
        }));

        Body::wrap_stream(stream)
    }
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(
        &self,
        file: ImageFile,
        progress: ProgressSink,
    ) -> Result<UploadedImage, ImageHostError> {
        let total = file.size();
        let ImageFile {
            file_name,
            content_type,
            bytes,
        } = file;

        let part = Part::stream_with_length(Self::progress_body(bytes, progress), total)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| ImageHostError::InvalidRequest(e.to_string()))?;

        let form = Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .part("file", part);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageHostError::Network(e.to_string()))?;

        check_upload_status(response.status())?;

        let body: CloudinaryUploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::InvalidResponse(e.to_string()))?;

        Ok(UploadedImage {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), ImageHostError> {
        warn!(public_id, "Image delete requested but not supported by unsigned uploads");
        Err(ImageHostError::Unsupported(
            "Deleting hosted images would require a signed request".to_string(),
        ))
    }
}

/// The upload API answers 200 with the asset; anything else is a failed upload.
fn check_upload_status(status: StatusCode) -> Result<(), ImageHostError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ImageHostError::UploadFailed {
            status: status.as_u16(),
        })
    }
}
