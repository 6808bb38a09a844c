use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::portfolio::application::domain::section::PortfolioSection;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSectionError {
    #[error("Section not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// List sections come back one page at a time; object sections whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Page(PageResult<Value>),
    Object(Value),
}

#[async_trait]
pub trait GetSectionUseCase: Send + Sync {
    async fn execute(
        &self,
        section: PortfolioSection,
        page: PageRequest,
    ) -> Result<SectionContent, GetSectionError>;
}
