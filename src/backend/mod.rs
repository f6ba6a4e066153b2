//! Backend Module
//!
//! This module contains all server-side code for DevConnector.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`store`** - Document store contract and its backends
//! - **`auth`** - Accounts, password hashing, tokens
//! - **`middleware`** - Token verification for private routes
//! - **`profile`** - Profiles with experience and education
//! - **`posts`** - Posts, likes and comments
//! - **`error`** - Handler error type and its HTTP rendering
//! - **`extract`** - JSON body extractor that rejects through `BackendError`
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route tables and router assembly
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── store/          - Persistence
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── profile/        - Profile handlers
//! ├── posts/          - Post handlers
//! ├── error/          - Error types
//! ├── extract.rs      - JSON extractor
//! ├── server/         - Server initialization and state
//! └── routes/         - Route configuration
//! ```
//!
//! # Request Flow
//!
//! client request → auth middleware (private routes) → handler → store →
//! JSON response. Handlers return `BackendResult<T>`; every failure is
//! rendered once by `BackendError`'s `IntoResponse`.
//!
//! # State Management
//!
//! `AppState` holds the store, the token service and the bcrypt cost. The
//! store is the only state shared between requests; list mutations go
//! through `Store::update_with` so they are atomic per document.

/// Document persistence
pub mod store;

/// Authentication and accounts
pub mod auth;

/// HTTP middleware
pub mod middleware;

/// Profiles
pub mod profile;

/// Posts
pub mod posts;

/// Error types
pub mod error;

/// Request extractors
pub mod extract;

/// Server setup
pub mod server;

/// Routing
pub mod routes;
