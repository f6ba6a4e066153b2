/**
 * PostgreSQL Document Store
 *
 * Stores every collection in one `documents` table with a JSONB body.
 * Filters are evaluated with JSON containment (`body @> $filter`).
 *
 * # Atomicity
 *
 * - `update_one` runs inside a transaction and locks the matched row with
 *   `SELECT ... FOR UPDATE` before calling the mutation.
 * - `insert` takes a transaction-scoped advisory lock keyed on the
 *   collection name before checking unique fields, so two concurrent
 *   inserts of the same email cannot both succeed.
 */

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{DocumentStore, Filter, Mutation, StoreError, StoreResult};

/// Document store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to `database_url` and apply the embedded migrations
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Wrap an existing pool; migrations must already be applied
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Value>> {
        let row: Option<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(body),)| body))
    }

    async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>> {
        let rows: Vec<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(Json(body),)| body).collect())
    }

    async fn insert(
        &self,
        collection: &str,
        id: Uuid,
        document: Value,
        unique_fields: &[&str],
    ) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        if !unique_fields.is_empty() {
            sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
                .bind(collection)
                .execute(&mut *tx)
                .await?;
        }

        for field in unique_fields {
            let Some(value) = document.get(*field) else {
                continue;
            };
            let taken: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM documents WHERE collection = $1 AND body @> $2)",
            )
            .bind(collection)
            .bind(Json(Filter::eq(field, value.clone()).to_json()))
            .fetch_one(&mut *tx)
            .await?;

            if taken {
                return Err(StoreError::Duplicate {
                    field: field.to_string(),
                });
            }
        }

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id)
            .bind(Json(document))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        mutation: Mutation<'_>,
    ) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(Uuid, Json<Value>)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_optional(&mut *tx)
        .await?;

        let Some((id, Json(body))) = row else {
            return Ok(false);
        };

        match mutation(body)? {
            Some(updated) => {
                sqlx::query("UPDATE documents SET body = $3 WHERE collection = $1 AND id = $2")
                    .bind(collection)
                    .bind(id)
                    .bind(Json(updated))
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
            }
            None => tx.rollback().await?,
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = (
                SELECT id FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND body @> $2")
            .bind(collection)
            .bind(Json(filter.to_json()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
