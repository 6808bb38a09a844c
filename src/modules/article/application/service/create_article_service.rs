use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::article::application::domain::article::{first_blank_field, Article, CreateArticleData};
use crate::article::application::domain::read_time::calculate_read_time;
use crate::article::application::ports::incoming::use_cases::{
    CreateArticleError, CreateArticleUseCase,
};
use crate::article::application::ports::outgoing::article_repository::ArticleRepository;
use crate::media::application::ports::incoming::use_cases::{
    CommitImageError, CommitStagedImageUseCase,
};
use crate::shared::slug::{generate_slug, generate_unique_slug};

/// Slug used when a title has no sluggable characters.
pub const FALLBACK_SLUG: &str = "article";

pub(crate) fn base_slug(title: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

pub(crate) fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateArticleService<R>
where
    R: ArticleRepository,
{
    repository: R,
    images: Arc<dyn CommitStagedImageUseCase + Send + Sync>,
    author: String,
}

impl<R> CreateArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(
        repository: R,
        images: Arc<dyn CommitStagedImageUseCase + Send + Sync>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            images,
            author: author.into(),
        }
    }
}

#[async_trait]
impl<R> CreateArticleUseCase for CreateArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, data: CreateArticleData) -> Result<Article, CreateArticleError> {
        if let Some(field) = first_blank_field(&[
            ("title", data.title.as_str()),
            ("excerpt", data.excerpt.as_str()),
            ("description", data.description.as_str()),
            ("category", data.category.as_str()),
        ]) {
            return Err(CreateArticleError::Validation(format!("{} is required", field)));
        }

        let title = data.title.trim().to_string();
        let slug_base = base_slug(&title);

        let image = match data.image.as_deref() {
            None => None,
            Some(raw) => {
                let committed = self
                    .images
                    .execute(raw, &slug_base)
                    .await
                    .map_err(|e| match e {
                        CommitImageError::InvalidImage(msg) => CreateArticleError::InvalidImage(msg),
                        CommitImageError::UploadFailed(msg) => {
                            CreateArticleError::ImageUploadFailed(msg)
                        }
                    })?;
                Some(committed).filter(|url| !url.is_empty())
            }
        };

        let existing: Vec<String> = self
            .repository
            .list_slugs()
            .await
            .map_err(|e| CreateArticleError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|(_, slug)| slug)
            .collect();
        let slug = generate_unique_slug(&slug_base, &existing);

        let category = data.category.trim().to_string();
        let category_label = if data.category_label.trim().is_empty() {
            category.clone()
        } else {
            data.category_label.trim().to_string()
        };

        let article = Article {
            id: String::new(),
            read_time: calculate_read_time(&data.description),
            title,
            slug,
            excerpt: data.excerpt.trim().to_string(),
            description: data.description,
            category,
            category_label,
            image,
            featured: data.featured,
            visibility: data.visibility,
            tags: clean_tags(data.tags),
            author: self.author.clone(),
            date: Utc::now(),
            updated_at: None,
        };

        let created = self
            .repository
            .insert(article)
            .await
            .map_err(|e| CreateArticleError::RepositoryError(e.to_string()))?;

        info!(article_id = %created.id, slug = %created.slug, "Article created");
        Ok(created)
    }
}
