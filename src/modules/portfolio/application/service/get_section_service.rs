use async_trait::async_trait;
use serde_json::Value;

use crate::portfolio::application::domain::section::PortfolioSection;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetSectionError, GetSectionUseCase, SectionContent,
};
use crate::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;
use crate::shared::pagination::{paginate, PageRequest};

pub struct GetSectionService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetSectionService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSectionUseCase for GetSectionService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        section: PortfolioSection,
        page: PageRequest,
    ) -> Result<SectionContent, GetSectionError> {
        let stored = self
            .repository
            .load_section(section)
            .await
            .map_err(|e| GetSectionError::RepositoryError(e.to_string()))?;

        let value = match stored {
            Some(data) => data
                .to_json()
                .map_err(|e| GetSectionError::RepositoryError(e.to_string()))?,
            None if section.is_list() => Value::Array(Vec::new()),
            None => return Err(GetSectionError::NotFound),
        };

        Ok(match value {
            Value::Array(items) => SectionContent::Page(paginate(items, page)),
            other => SectionContent::Object(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_store::ContentStoreMemory;
    use crate::portfolio::adapter::outgoing::PortfolioRepositoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn service(data: Value) -> GetSectionService<PortfolioRepositoryStore> {
        GetSectionService::new(PortfolioRepositoryStore::new(Arc::new(
            ContentStoreMemory::with_data(data),
        )))
    }

    #[tokio::test]
    async fn test_list_section_is_paginated() {
        let achievements: Vec<Value> = (0..7)
            .map(|i| json!({"id": format!("a{}", i), "title": format!("A{}", i)}))
            .collect();
        let service = service(json!({"portfolio": {"achievements": achievements}}));

        let content = service
            .execute(PortfolioSection::Achievements, PageRequest::new(2, 5, 10))
            .await
            .unwrap();

        let SectionContent::Page(page) = content else {
            panic!("expected a page");
        };
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0]["id"], "a5");
    }

    #[tokio::test]
    async fn test_missing_list_is_empty_page() {
        let content = service(json!({}))
            .execute(PortfolioSection::Projects, PageRequest::default())
            .await
            .unwrap();

        assert!(matches!(content, SectionContent::Page(p) if p.total == 0));
    }

    #[tokio::test]
    async fn test_object_section() {
        let service = service(json!({"portfolio": {"personalInfo": {"name": "Ada"}}}));

        let content = service
            .execute(PortfolioSection::PersonalInfo, PageRequest::default())
            .await
            .unwrap();
        assert!(matches!(content, SectionContent::Object(v) if v["name"] == "Ada"));

        assert_eq!(
            service
                .execute(PortfolioSection::Skills, PageRequest::default())
                .await
                .unwrap_err(),
            GetSectionError::NotFound
        );
    }
}
