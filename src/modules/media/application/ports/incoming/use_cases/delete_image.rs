use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteImageError {
    #[error("{0}")]
    Unsupported(String),

    #[error("Image host error: {0}")]
    HostError(String),
}

#[async_trait]
pub trait DeleteImageUseCase: Send + Sync {
    async fn execute(&self, public_id: &str) -> Result<(), DeleteImageError>;
}
