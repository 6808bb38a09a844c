use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::modules::content_store::application::domain::store_path::{
    merge_at, new_push_id, read_at, remove_at, write_at, StorePath,
};
use crate::modules::content_store::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

/// Process-local store. Used for `CONTENT_STORE=memory` and in tests.
#[derive(Default)]
pub struct ContentStoreMemory {
    tree: RwLock<Value>,
}

impl ContentStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(tree: Value) -> Self {
        Self {
            tree: RwLock::new(tree),
        }
    }
}

#[async_trait]
impl ContentStore for ContentStoreMemory {
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, ContentStoreError> {
        let tree = self.tree.read().await;
        Ok(read_at(&tree, path.segments()).cloned())
    }

    async fn set(&self, path: &StorePath, value: Value) -> Result<(), ContentStoreError> {
        let mut tree = self.tree.write().await;
        write_at(&mut tree, path.segments(), value)?;
        Ok(())
    }

    async fn update(
        &self,
        path: &StorePath,
        fields: Map<String, Value>,
    ) -> Result<(), ContentStoreError> {
        let mut tree = self.tree.write().await;
        merge_at(&mut tree, path.segments(), fields)?;
        Ok(())
    }

    async fn push(&self, path: &StorePath, value: Value) -> Result<String, ContentStoreError> {
        let id = new_push_id();
        let child = path.child(&id)?;

        let mut tree = self.tree.write().await;
        write_at(&mut tree, child.segments(), value)?;
        Ok(id)
    }

    async fn remove(&self, path: &StorePath) -> Result<bool, ContentStoreError> {
        let mut tree = self.tree.write().await;
        Ok(remove_at(&mut tree, path.segments()))
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        Ok(())
    }
}
