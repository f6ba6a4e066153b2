//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Token verification for private routes, plus the
//!   `AuthUser` extractor handlers use to read the caller's identity
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, Router};
//! use devconnector::backend::middleware::auth_middleware;
//! use devconnector::backend::server::state::AppState;
//!
//! fn protect(private: Router<AppState>, state: AppState) -> Router<AppState> {
//!     private.route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
