use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QuerySelect, Set,
    TransactionTrait,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::modules::content_store::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity,
};
use crate::modules::content_store::application::domain::store_path::{
    merge_at, new_push_id, read_at, remove_at, write_at, StorePath,
};
use crate::modules::content_store::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};

// ============================================================================
// Store Implementation
// ============================================================================

/// Keeps each root document as one JSONB row in `content_nodes`.
///
/// Writes lock the root row (`SELECT ... FOR UPDATE`), apply the change to the
/// loaded tree and upsert it in the same transaction.
#[derive(Clone)]
pub struct ContentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn mutate<F, R>(&self, path: &StorePath, apply: F) -> Result<R, ContentStoreError>
    where
        F: FnOnce(&mut Value) -> Result<R, ContentStoreError> + Send,
        R: Send,
    {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::mutate_in(&txn, path, apply).await {
            Ok(out) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(out)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn mutate_in<F, R>(
        txn: &DatabaseTransaction,
        path: &StorePath,
        apply: F,
    ) -> Result<R, ContentStoreError>
    where
        F: FnOnce(&mut Value) -> Result<R, ContentStoreError> + Send,
        R: Send,
    {
        let root = path.root().to_string();

        let current = Entity::find_by_id(root.clone())
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(map_db_err)?;

        let mut tree = current.map(|row| row.value).unwrap_or(Value::Null);
        let out = apply(&mut tree)?;

        if tree.is_null() {
            Entity::delete_by_id(root)
                .exec(txn)
                .await
                .map_err(map_db_err)?;
            return Ok(out);
        }

        let row = ActiveModel {
            root: Set(root),
            value: Set(tree),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(row)
            .on_conflict(
                OnConflict::column(Column::Root)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await
            .map_err(map_db_err)?;

        Ok(out)
    }
}

#[async_trait]
impl ContentStore for ContentStorePostgres {
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, ContentStoreError> {
        let row = Entity::find_by_id(path.root().to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|r| read_at(&r.value, path.rest()).cloned()))
    }

    async fn set(&self, path: &StorePath, value: Value) -> Result<(), ContentStoreError> {
        let rest = path.rest().to_vec();
        self.mutate(path, move |tree| Ok(write_at(tree, &rest, value)?))
            .await
    }

    async fn update(
        &self,
        path: &StorePath,
        fields: Map<String, Value>,
    ) -> Result<(), ContentStoreError> {
        let rest = path.rest().to_vec();
        self.mutate(path, move |tree| Ok(merge_at(tree, &rest, fields)?))
            .await
    }

    async fn push(&self, path: &StorePath, value: Value) -> Result<String, ContentStoreError> {
        let id = new_push_id();
        let child = path.child(&id)?;
        let rest = child.rest().to_vec();

        self.mutate(&child, move |tree| Ok(write_at(tree, &rest, value)?))
            .await?;

        Ok(id)
    }

    async fn remove(&self, path: &StorePath) -> Result<bool, ContentStoreError> {
        let rest = path.rest().to_vec();
        self.mutate(path, move |tree| Ok(remove_at(tree, &rest))).await
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        self.db.ping().await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ContentStoreError {
    ContentStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
