//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Public and private route tables
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API route tables
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnector::backend::auth::sessions::TokenService;
//! use devconnector::backend::routes::create_router;
//! use devconnector::backend::server::state::AppState;
//! use devconnector::backend::store::Store;
//!
//! let app_state = AppState::new(
//!     Store::memory(),
//!     TokenService::new("secret", chrono::Duration::hours(1)),
//!     bcrypt::DEFAULT_COST,
//! );
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// API route tables
pub mod api_routes;

pub use router::create_router;
