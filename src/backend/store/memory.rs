/**
 * In-Memory Document Store
 *
 * Keeps every collection in a `Vec<Value>` behind a single `tokio` RwLock.
 * Used when no `DATABASE_URL` is configured and throughout the test suite.
 *
 * Each write operation holds the write lock for its whole duration, so
 * unique-field checks and `update_one` mutations are atomic with respect
 * to every other request.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, Filter, Mutation, StoreError, StoreResult};

/// Process-local document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        collection: &str,
        id: Uuid,
        document: Value,
        unique_fields: &[&str],
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        for field in unique_fields {
            let Some(value) = document.get(*field) else {
                continue;
            };
            if docs.iter().any(|doc| doc.get(*field) == Some(value)) {
                return Err(StoreError::Duplicate {
                    field: field.to_string(),
                });
            }
        }

        tracing::debug!("Inserted {} document {}", collection, id);
        docs.push(document);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        mutation: Mutation<'_>,
    ) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter.matches(doc)))
        else {
            return Ok(false);
        };

        if let Some(updated) = mutation(slot.clone())? {
            *slot = updated;
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| !filter.matches(doc));
        Ok((before - docs.len()) as u64)
    }
}
