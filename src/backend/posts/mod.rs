//! Posts Module
//!
//! The post feed: posts with inline likes and comments.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports and documentation
//! ├── model.rs     - Post, Like and Comment documents
//! └── handlers.rs  - HTTP handlers
//! ```

/// Post documents
pub mod model;

/// HTTP handlers
pub mod handlers;

pub use model::{Comment, Like, Post};
