//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Registration handler
//! ├── login.rs    - Authentication handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - Account registration
//! - **`login`** - POST /api/auth/login - Authentication
//! - **`get_me`** - GET /api/auth - Current user info (private)

/// Request and response types
pub mod types;

/// Registration handler
pub mod signup;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

pub use login::login;
pub use me::get_me;
pub use signup::register;
