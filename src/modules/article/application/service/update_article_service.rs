use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::article::application::domain::article::{Article, ArticlePatch};
use crate::article::application::domain::read_time::calculate_read_time;
use crate::article::application::ports::incoming::use_cases::{
    UpdateArticleError, UpdateArticleUseCase,
};
use crate::article::application::ports::outgoing::article_repository::ArticleRepository;
use crate::media::application::ports::incoming::use_cases::{
    CommitImageError, CommitStagedImageUseCase,
};
use crate::shared::patch::PatchField;
use crate::shared::slug::generate_unique_slug;

use super::create_article_service::{base_slug, clean_tags};

/// Replaces a required text field; `null` or blank is rejected.
fn apply_required(
    field: &'static str,
    patch: PatchField<String>,
    current: &mut String,
) -> Result<bool, UpdateArticleError> {
    match patch {
        PatchField::Unset => Ok(false),
        PatchField::Null => Err(UpdateArticleError::Validation(format!("{} is required", field))),
        PatchField::Value(v) if v.trim().is_empty() => {
            Err(UpdateArticleError::Validation(format!("{} is required", field)))
        }
        PatchField::Value(v) => {
            let changed = *current != v;
            *current = v;
            Ok(changed)
        }
    }
}

pub struct UpdateArticleService<R>
where
    R: ArticleRepository,
{
    repository: R,
    images: Arc<dyn CommitStagedImageUseCase + Send + Sync>,
}

impl<R> UpdateArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(repository: R, images: Arc<dyn CommitStagedImageUseCase + Send + Sync>) -> Self {
        Self { repository, images }
    }

    async fn unique_slug_for(&self, article: &Article) -> Result<String, UpdateArticleError> {
        let others: Vec<String> = self
            .repository
            .list_slugs()
            .await
            .map_err(|e| UpdateArticleError::RepositoryError(e.to_string()))?
            .into_iter()
            .filter(|(id, _)| *id != article.id)
            .map(|(_, slug)| slug)
            .collect();

        Ok(generate_unique_slug(&base_slug(&article.title), &others))
    }
}

#[async_trait]
impl<R> UpdateArticleUseCase for UpdateArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, id: &str, patch: ArticlePatch) -> Result<Article, UpdateArticleError> {
        let mut article = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| UpdateArticleError::RepositoryError(e.to_string()))?
            .ok_or(UpdateArticleError::NotFound)?;

        let title_changed = apply_required("title", patch.title, &mut article.title)?;
        apply_required("excerpt", patch.excerpt, &mut article.excerpt)?;
        let body_changed = apply_required("description", patch.description, &mut article.description)?;
        apply_required("category", patch.category, &mut article.category)?;

        match patch.category_label {
            PatchField::Unset => {}
            PatchField::Null => article.category_label = article.category.clone(),
            PatchField::Value(v) => article.category_label = v,
        }

        if let PatchField::Value(featured) = patch.featured {
            article.featured = featured;
        }
        if let PatchField::Value(visibility) = patch.visibility {
            article.visibility = visibility;
        }
        match patch.tags {
            PatchField::Unset => {}
            PatchField::Null => article.tags.clear(),
            PatchField::Value(tags) => article.tags = clean_tags(tags),
        }

        article.image = match patch.image {
            PatchField::Value(raw) => {
                let committed = self
                    .images
                    .execute(&raw, &base_slug(&article.title))
                    .await
                    .map_err(|e| match e {
                        CommitImageError::InvalidImage(msg) => UpdateArticleError::InvalidImage(msg),
                        CommitImageError::UploadFailed(msg) => {
                            UpdateArticleError::ImageUploadFailed(msg)
                        }
                    })?;
                Some(committed).filter(|url| !url.is_empty())
            }
            other => other.apply_to_option(article.image.take()),
        };

        if title_changed {
            article.slug = self.unique_slug_for(&article).await?;
        }
        if body_changed {
            article.read_time = calculate_read_time(&article.description);
        }
        article.updated_at = Some(Utc::now());

        self.repository
            .replace(&article)
            .await
            .map_err(|e| UpdateArticleError::RepositoryError(e.to_string()))?;

        info!(article_id = %article.id, slug = %article.slug, "Article updated");
        Ok(article)
    }
}
