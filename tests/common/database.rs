//! Database test fixtures and utilities
//!
//! PostgreSQL tests run only when `DATABASE_URL` is set; without it each
//! test returns early. Tests share one database, so every test writes to
//! its own collection (or uses unique emails) and removes what it wrote.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use devconnector::backend::store::{PgStore, Store, DEFAULT_STORE_TIMEOUT};

/// Database URL for PostgreSQL tests, if one is configured
pub fn test_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty())
}

/// Run the embedded migrations against `pool`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Migrated pool plus a `PgStore` over it
pub struct TestDatabase {
    pool: PgPool,
    backend: PgStore,
}

impl TestDatabase {
    /// Connect and migrate, or `None` when no database is configured
    pub async fn connect() -> Option<Self> {
        let Some(url) = test_database_url() else {
            eprintln!("DATABASE_URL not set; skipping PostgreSQL test");
            return None;
        };

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create test database pool");
        run_migrations(&pool).await.expect("Failed to run migrations");

        Some(Self {
            backend: PgStore::from_pool(pool.clone()),
            pool,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The raw backend, for tests below the `Store` facade
    pub fn backend(&self) -> &PgStore {
        &self.backend
    }

    /// A `Store` over this database
    pub fn store(&self) -> Store {
        Store::new(Arc::new(self.backend.clone()), DEFAULT_STORE_TIMEOUT)
    }

    /// A collection name no other test uses
    pub fn scratch_collection(&self) -> String {
        format!("test_{}", Uuid::new_v4().simple())
    }

    /// Delete every document in `collection`
    pub async fn drop_collection(&self, collection: &str) {
        sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection)
            .execute(&self.pool)
            .await
            .expect("Failed to clean up collection");
    }

    /// Delete the listed documents from `collection`
    pub async fn delete_ids(&self, collection: &str, ids: &[Uuid]) {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = ANY($2)")
            .bind(collection)
            .bind(ids)
            .execute(&self.pool)
            .await
            .expect("Failed to clean up documents");
    }
}
