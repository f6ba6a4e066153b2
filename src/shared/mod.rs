//! Shared Module
//!
//! Helpers with no dependency on the HTTP layer or the store.

/// Request field validation
pub mod validation;

pub use validation::{FieldError, Validator};
