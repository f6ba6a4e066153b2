//! PostgreSQL integration tests
//!
//! Skipped unless `DATABASE_URL` points at a database the tests may write
//! to.

mod migrations_test;
