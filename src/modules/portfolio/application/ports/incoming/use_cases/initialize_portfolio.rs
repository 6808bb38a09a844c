use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitializePortfolioError {
    #[error("Bundled defaults are unreadable: {0}")]
    Defaults(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Seeds the portfolio document from the bundled defaults.
#[async_trait]
pub trait InitializePortfolioUseCase: Send + Sync {
    /// Returns whether the document was written. Without `force` an existing
    /// document is left alone.
    async fn execute(&self, force: bool) -> Result<bool, InitializePortfolioError>;
}
