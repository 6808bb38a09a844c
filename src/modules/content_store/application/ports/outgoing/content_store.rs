// src/modules/content_store/application/ports/outgoing/content_store.rs

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::modules::content_store::application::domain::store_path::{StorePath, StorePathError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentStoreError {
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] StorePathError),

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

/// Path-addressed JSON document store.
///
/// Every write is whole-subtree at its path; there is no version check, so
/// concurrent writers to the same path resolve as last-writer-wins.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// `None` when nothing is stored at `path`.
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, ContentStoreError>;

    /// Replaces the subtree at `path`. `Value::Null` removes it.
    async fn set(&self, path: &StorePath, value: Value) -> Result<(), ContentStoreError>;

    /// Shallow merge of top-level keys into the object at `path`.
    async fn update(
        &self,
        path: &StorePath,
        fields: Map<String, Value>,
    ) -> Result<(), ContentStoreError>;

    /// Stores `value` under a freshly generated child key and returns that key.
    async fn push(&self, path: &StorePath, value: Value) -> Result<String, ContentStoreError>;

    /// Returns whether anything was removed.
    async fn remove(&self, path: &StorePath) -> Result<bool, ContentStoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), ContentStoreError>;
}

pub type SharedContentStore = Arc<dyn ContentStore + Send + Sync>;
