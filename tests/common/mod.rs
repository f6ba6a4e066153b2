//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process application with request helpers
//! - PostgreSQL fixtures, used when `DATABASE_URL` is set
//! - Account helpers that register users through the API
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use test_app::*;
