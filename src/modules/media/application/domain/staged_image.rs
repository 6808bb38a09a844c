use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::media::application::domain::entities::ImageFile;

/// What an image-bearing form field currently holds.
///
/// Editors keep a picked file as a `data:` URL preview until the record is
/// saved; only then is it uploaded and swapped for the hosted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Empty,
    Url(String),
    Staged(ImageFile),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StagedImageError {
    #[error("Malformed data URL")]
    Malformed,

    #[error("Only base64 data URLs are supported")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),
}

pub fn is_data_url(value: &str) -> bool {
    value.trim_start().starts_with("data:")
}

impl ImageSource {
    /// `file_stem` names the upload when the field holds a staged image.
    pub fn parse(value: &str, file_stem: &str) -> Result<Self, StagedImageError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Self::Empty);
        }
        if !is_data_url(value) {
            return Ok(Self::Url(value.to_string()));
        }
        decode_data_url(value, file_stem).map(Self::Staged)
    }
}

/// Decodes `data:<mime>[;param...];base64,<payload>`.
pub fn decode_data_url(value: &str, file_stem: &str) -> Result<ImageFile, StagedImageError> {
    let rest = value
        .trim()
        .strip_prefix("data:")
        .ok_or(StagedImageError::Malformed)?;

    let (header, payload) = rest.split_once(',').ok_or(StagedImageError::Malformed)?;

    let mut params = header.split(';');
    let content_type = params.next().unwrap_or_default().trim().to_ascii_lowercase();
    if content_type.is_empty() {
        return Err(StagedImageError::Malformed);
    }
    if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(StagedImageError::NotBase64);
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| StagedImageError::InvalidBase64(e.to_string()))?;

    let file_name = format!("{}.{}", file_stem, extension_for(&content_type));

    Ok(ImageFile::new(file_name, content_type, bytes))
}

fn extension_for(content_type: &str) -> &str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}
