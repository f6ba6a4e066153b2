//! DevConnector - Main Library
//!
//! REST backend for a developer social network: accounts with token
//! authentication, one profile per user with experience and education
//! history, and a post feed with likes and comments.
//!
//! # Module Structure
//!
//! - **`shared`** - Request validation helpers
//!
//! - **`backend`** - Axum HTTP server
//!   - Document store with in-memory and PostgreSQL backends
//!   - Authentication, tokens and the auth middleware
//!   - Profile and post handlers
//!   - Configuration, state and router assembly
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnector::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Validation helpers shared by request types
pub mod shared;

/// Server-side code
pub mod backend;
