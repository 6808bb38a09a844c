use async_trait::async_trait;

use crate::portfolio::application::domain::portfolio::PortfolioDocument;
use crate::portfolio::application::domain::section::{PortfolioSection, SectionData};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// `None` until the document has been initialised.
    async fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioRepositoryError>;

    /// `None` when the section key is absent.
    async fn load_section(
        &self,
        section: PortfolioSection,
    ) -> Result<Option<SectionData>, PortfolioRepositoryError>;

    async fn save(&self, document: &PortfolioDocument) -> Result<(), PortfolioRepositoryError>;

    /// Replaces exactly one section, leaving the others untouched.
    async fn save_section(&self, data: &SectionData) -> Result<(), PortfolioRepositoryError>;
}
