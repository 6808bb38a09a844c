use async_trait::async_trait;

use crate::content_store::{ContentStoreError, SharedContentStore, StorePath};
use crate::portfolio::application::domain::portfolio::PortfolioDocument;
use crate::portfolio::application::domain::section::{PortfolioSection, SectionData};
use crate::portfolio::application::ports::outgoing::portfolio_repository::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub const PORTFOLIO_ROOT: &str = "portfolio";

/// The portfolio document at `portfolio`, one child key per section.
#[derive(Clone)]
pub struct PortfolioRepositoryStore {
    store: SharedContentStore,
}

impl PortfolioRepositoryStore {
    pub fn new(store: SharedContentStore) -> Self {
        Self { store }
    }

    fn root() -> Result<StorePath, PortfolioRepositoryError> {
        StorePath::parse(PORTFOLIO_ROOT).map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))
    }

    fn section_path(section: PortfolioSection) -> Result<StorePath, PortfolioRepositoryError> {
        Self::root()?
            .child(section.key())
            .map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))
    }
}

fn map_store_err(e: ContentStoreError) -> PortfolioRepositoryError {
    match e {
        ContentStoreError::SerializationError(msg) => {
            PortfolioRepositoryError::SerializationError(msg)
        }
        other => PortfolioRepositoryError::DatabaseError(other.to_string()),
    }
}

fn serialization(e: impl ToString) -> PortfolioRepositoryError {
    PortfolioRepositoryError::SerializationError(e.to_string())
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryStore {
    async fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioRepositoryError> {
        match self.store.get(&Self::root()?).await.map_err(map_store_err)? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(serialization),
            None => Ok(None),
        }
    }

    async fn load_section(
        &self,
        section: PortfolioSection,
    ) -> Result<Option<SectionData>, PortfolioRepositoryError> {
        let path = Self::section_path(section)?;

        match self.store.get(&path).await.map_err(map_store_err)? {
            Some(value) => SectionData::from_json(section, value)
                .map(Some)
                .map_err(serialization),
            None => Ok(None),
        }
    }

    async fn save(&self, document: &PortfolioDocument) -> Result<(), PortfolioRepositoryError> {
        let value = serde_json::to_value(document).map_err(serialization)?;

        self.store
            .set(&Self::root()?, value)
            .await
            .map_err(map_store_err)
    }

    async fn save_section(&self, data: &SectionData) -> Result<(), PortfolioRepositoryError> {
        let path = Self::section_path(data.section())?;
        let value = data.to_json().map_err(serialization)?;

        self.store.set(&path, value).await.map_err(map_store_err)
    }
}
