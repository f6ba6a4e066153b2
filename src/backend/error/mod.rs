//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its status/message mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Propagation
//!
//! Lower layers raise their own errors (`StoreError`, `TokenError`,
//! `PasswordError`); they are converted into `BackendError` with `?` at
//! the handler boundary and rendered once.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{parse_id, BackendError};

/// Result alias used by handlers
pub type BackendResult<T> = Result<T, BackendError>;
