//! Authentication Module
//!
//! This module handles accounts, credentials and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User document and credential store lookups
//! - **`password`** - bcrypt hashing off the async runtime
//! - **`sessions`** - Token issuing and verification
//! - **`handlers`** - HTTP handlers for account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Current user**: token → verified by middleware → user info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are stateless and expire after the configured lifetime
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and store operations
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use handlers::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use sessions::{Claims, TokenError, TokenService};
