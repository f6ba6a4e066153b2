//! Profile Module
//!
//! Developer profiles: one per user, with experience and education lists
//! that only the owner may change.
//!
//! # Module Structure
//!
//! ```text
//! profile/
//! ├── mod.rs       - Module exports and documentation
//! ├── model.rs     - Profile, Experience, Education, Social documents
//! ├── types.rs     - Request bodies, validation and read view
//! └── handlers.rs  - HTTP handlers
//! ```

/// Profile documents
pub mod model;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::{Education, Experience, Profile, Social};
