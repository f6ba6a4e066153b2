//! Document Store Module
//!
//! This module defines the persistence contract used by every handler.
//! Users, profiles and posts are stored as JSON documents grouped into
//! named collections, and looked up by top-level field equality.
//!
//! # Architecture
//!
//! - **`DocumentStore`** - Object-safe async trait implemented by each backend
//! - **`Store`** - Cloneable typed facade held in `AppState`; it encodes and
//!   decodes documents and bounds every call with a timeout
//! - **`memory`** - In-process backend (`tokio::sync::RwLock`)
//! - **`postgres`** - PostgreSQL backend (JSONB table via `sqlx`)
//!
//! # Atomic updates
//!
//! `DocumentStore::update_one` hands the current document to a mutation
//! closure while the backend holds a per-document lock, and writes back
//! whatever the closure returns. Handlers therefore never run a separate
//! read, compute and save sequence for list mutations (likes, comments,
//! experience, education), so concurrent requests cannot lose each other's
//! updates.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Contract, filters, typed facade
//! ├── memory.rs    - In-memory backend
//! └── postgres.rs  - PostgreSQL backend
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// In-memory backend
pub mod memory;

/// PostgreSQL backend
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Default bound applied to each store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field already holds the inserted value
    #[error("duplicate value for unique field '{field}'")]
    Duplicate {
        /// Name of the unique field
        field: String,
    },

    /// The call did not complete within the configured bound
    #[error("store operation '{operation}' timed out")]
    Timeout {
        /// Operation name, for logs
        operation: &'static str,
    },

    /// A document could not be encoded or decoded
    #[error("document codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The backend matched a document but never ran the mutation
    #[error("update matched a document without applying the mutation")]
    MutationSkipped,

    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure while opening the database
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation applied by `update_one` to a matched document.
///
/// Returning `Ok(Some(doc))` replaces the stored document, `Ok(None)` leaves
/// it untouched.
pub type Mutation<'a> = Box<dyn FnOnce(Value) -> StoreResult<Option<Value>> + Send + 'a>;

/// Conjunction of top-level field equality tests
///
/// An empty filter matches every document in a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
}

impl Filter {
    /// Filter matching every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on the document `id`
    pub fn by_id(id: Uuid) -> Self {
        Self::eq("id", id.to_string())
    }

    /// Filter on one field
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// Add another equality test
    pub fn and(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Check whether a document satisfies every test
    pub fn matches(&self, document: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    /// JSON object form, used for containment queries
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// A type persisted as a document in a named collection
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name
    const COLLECTION: &'static str;

    /// Fields that must be unique across the collection
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    /// Document identity
    fn id(&self) -> Uuid;
}

/// Backend contract for document persistence
///
/// All operations are asynchronous and may fail with `StoreError`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document matching the filter
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Value>>;

    /// Every document matching the filter, in insertion order
    async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>>;

    /// Insert a document, rejecting it if any `unique_fields` value is taken
    async fn insert(
        &self,
        collection: &str,
        id: Uuid,
        document: Value,
        unique_fields: &[&str],
    ) -> StoreResult<()>;

    /// Atomically apply `mutation` to the first matching document.
    ///
    /// Returns `false` when nothing matched.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        mutation: Mutation<'_>,
    ) -> StoreResult<bool>;

    /// Delete the first matching document, returning whether one existed
    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<bool>;

    /// Delete every matching document, returning the count
    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;
}

/// Typed, time-bounded handle to a `DocumentStore`
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn DocumentStore>,
    timeout: Duration,
}

impl Store {
    /// Wrap a backend with a per-call timeout
    pub fn new(backend: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Fresh in-memory store with the default timeout
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), DEFAULT_STORE_TIMEOUT)
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout { operation })?
    }

    /// Load a document by id
    pub async fn find_by_id<T: Document>(&self, id: Uuid) -> StoreResult<Option<T>> {
        self.find_one(&Filter::by_id(id)).await
    }

    /// Load the first document matching `filter`
    pub async fn find_one<T: Document>(&self, filter: &Filter) -> StoreResult<Option<T>> {
        let found = self
            .bounded("find_one", self.backend.find_one(T::COLLECTION, filter))
            .await?;
        found.map(serde_json::from_value).transpose().map_err(StoreError::from)
    }

    /// Load every document matching `filter`
    pub async fn find_many<T: Document>(&self, filter: &Filter) -> StoreResult<Vec<T>> {
        self.bounded("find_many", self.backend.find_many(T::COLLECTION, filter))
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Insert a new document, enforcing `T::UNIQUE_FIELDS`
    pub async fn insert<T: Document>(&self, document: &T) -> StoreResult<()> {
        let body = serde_json::to_value(document)?;
        self.bounded(
            "insert",
            self.backend
                .insert(T::COLLECTION, document.id(), body, T::UNIQUE_FIELDS),
        )
        .await
    }

    /// Atomically modify the first document matching `filter`.
    ///
    /// `apply` runs while the backend holds the document lock. When it
    /// returns `Err`, nothing is written and the error is passed through.
    /// Returns `Ok(None)` when no document matched.
    pub async fn update_with<T, R, E, F>(&self, filter: &Filter, apply: F) -> Result<Option<R>, E>
    where
        T: Document,
        R: Send,
        E: From<StoreError> + Send,
        F: FnOnce(&mut T) -> Result<R, E> + Send,
    {
        let mut outcome: Option<Result<R, E>> = None;
        let slot = &mut outcome;
        let mutation: Mutation<'_> = Box::new(move |body: Value| -> StoreResult<Option<Value>> {
            let mut document: T = serde_json::from_value(body)?;
            match apply(&mut document) {
                Ok(value) => {
                    *slot = Some(Ok(value));
                    Ok(Some(serde_json::to_value(&document)?))
                }
                Err(err) => {
                    *slot = Some(Err(err));
                    Ok(None)
                }
            }
        });

        let matched = self
            .bounded(
                "update_one",
                self.backend.update_one(T::COLLECTION, filter, mutation),
            )
            .await?;

        if !matched {
            return Ok(None);
        }
        match outcome {
            Some(result) => result.map(Some),
            None => Err(StoreError::MutationSkipped.into()),
        }
    }

    /// Delete the first document matching `filter`
    pub async fn delete_one<T: Document>(&self, filter: &Filter) -> StoreResult<bool> {
        self.bounded("delete_one", self.backend.delete_one(T::COLLECTION, filter))
            .await
    }

    /// Delete every document matching `filter`
    pub async fn delete_many<T: Document>(&self, filter: &Filter) -> StoreResult<u64> {
        self.bounded("delete_many", self.backend.delete_many(T::COLLECTION, filter))
            .await
    }
}
