//! Server Module
//!
//! Server initialization, application state and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment configuration and store selection
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Application assembly
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
