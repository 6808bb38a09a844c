use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Draft,
    Public,
    Private,
}

/// A blog article as stored under `articles/<id>`.
///
/// `slug` and `read_time` are derived; `author` and `date` are stamped once at
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// Store key; not persisted inside the record.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// HTML body
    pub description: String,
    pub category: String,
    pub category_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub read_time: String,
}

impl Article {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Editor input for a new article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateArticleData {
    pub title: String,
    pub excerpt: String,
    pub description: String,
    pub category: String,
    /// Defaults to `category` when blank.
    pub category_label: String,
    /// Hosted URL or a staged `data:` URL.
    pub image: Option<String>,
    pub featured: bool,
    pub visibility: Visibility,
    pub tags: Vec<String>,
}

/// Partial update. Omitted fields keep their value; `null` clears `image`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticlePatch {
    pub title: PatchField<String>,
    pub excerpt: PatchField<String>,
    pub description: PatchField<String>,
    pub category: PatchField<String>,
    pub category_label: PatchField<String>,
    pub image: PatchField<String>,
    pub featured: PatchField<bool>,
    pub visibility: PatchField<Visibility>,
    pub tags: PatchField<Vec<String>>,
}

/// Name of the first blank required field, if any.
pub fn first_blank_field<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}
