//! Schema tests for the embedded migrations

use crate::common::database::{run_migrations, TestDatabase};

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    assert!(run_migrations(db.pool()).await.is_ok(), "second run should be a no-op");
}

#[tokio::test]
async fn test_documents_table_exists() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };

    let columns: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT column_name::text
        FROM information_schema.columns
        WHERE table_name = 'documents'
        ORDER BY ordinal_position
        "#,
    )
    .fetch_all(db.pool())
    .await
    .unwrap();

    assert_eq!(columns, vec!["collection", "id", "seq", "body"]);
}
