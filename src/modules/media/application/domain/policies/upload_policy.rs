use crate::config::{parse_or, ConfigError};
use crate::media::application::domain::entities::{ImageFile, ImageValidation};

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const DEFAULT_MAX_SIZE_MB: u64 = 5;

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImagePolicyError {
    #[error("Invalid file type. Please upload a JPEG, PNG, GIF, or WebP image.")]
    UnsupportedType(String),

    #[error("File size must be less than {max_mb}MB")]
    TooLarge { max_mb: u64, actual_bytes: u64 },

    #[error("File is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageUploadPolicy {
    pub max_size_mb: u64,
}

impl Default for ImageUploadPolicy {
    fn default() -> Self {
        Self {
            max_size_mb: DEFAULT_MAX_SIZE_MB,
        }
    }
}

impl ImageUploadPolicy {
    pub fn new(max_size_mb: u64) -> Self {
        Self { max_size_mb }
    }

    /// Reads `IMAGE_MAX_SIZE_MB` (default 5).
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_size_mb = parse_or("IMAGE_MAX_SIZE_MB", DEFAULT_MAX_SIZE_MB)?;
        if max_size_mb == 0 {
            return Err(ConfigError::Invalid {
                key: "IMAGE_MAX_SIZE_MB",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(Self { max_size_mb })
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(MIB)
    }

    pub fn check(&self, content_type: &str, size_bytes: u64) -> Result<(), ImagePolicyError> {
        if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
            return Err(ImagePolicyError::UnsupportedType(content_type.to_string()));
        }

        if size_bytes > self.max_size_bytes() {
            return Err(ImagePolicyError::TooLarge {
                max_mb: self.max_size_mb,
                actual_bytes: size_bytes,
            });
        }

        Ok(())
    }

    pub fn check_file(&self, file: &ImageFile) -> Result<(), ImagePolicyError> {
        if file.bytes.is_empty() {
            return Err(ImagePolicyError::Empty);
        }
        self.check(&file.content_type, file.size())
    }

    pub fn validate(&self, content_type: &str, size_bytes: u64) -> ImageValidation {
        match self.check(content_type, size_bytes) {
            Ok(()) => ImageValidation::ok(),
            Err(e) => ImageValidation::rejected(e.to_string()),
        }
    }
}

/// Type allow-list plus size limit in MiB; the size check is inclusive.
pub fn validate_image_file(content_type: &str, size_bytes: u64, max_size_mb: u64) -> ImageValidation {
    ImageUploadPolicy::new(max_size_mb).validate(content_type, size_bytes)
}
