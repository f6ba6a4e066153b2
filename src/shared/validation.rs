//! Request Validation
//!
//! Field-level validation shared by every handler that accepts a body.
//! Checks are collected rather than short-circuited, so a client receives
//! every problem with its submission in one `400` response.
//!
//! # Usage
//!
//! ```rust
//! use devconnector::shared::validation::Validator;
//!
//! let mut v = Validator::new();
//! v.require("name", "", "Name is required");
//! v.email("email", "not-an-email", "Please include a valid email");
//! let errors = v.finish().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears in the request body
    pub param: String,
    /// Human-readable message
    pub msg: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// Accumulates field errors for one request
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unconditionally
    pub fn reject(&mut self, param: &str, msg: &str) {
        self.errors.push(FieldError::new(param, msg));
    }

    /// Value must contain something other than whitespace
    pub fn require(&mut self, param: &str, value: &str, msg: &str) -> bool {
        let ok = !value.trim().is_empty();
        if !ok {
            self.reject(param, msg);
        }
        ok
    }

    /// Value must look like an email address
    pub fn email(&mut self, param: &str, value: &str, msg: &str) -> bool {
        let ok = is_valid_email(value);
        if !ok {
            self.reject(param, msg);
        }
        ok
    }

    /// Value must have at least `min` characters
    pub fn min_len(&mut self, param: &str, value: &str, min: usize, msg: &str) -> bool {
        let ok = value.chars().count() >= min;
        if !ok {
            self.reject(param, msg);
        }
        ok
    }

    /// Value must parse as a `YYYY-MM-DD` date
    pub fn date(&mut self, param: &str, value: &str, msg: &str) -> Option<NaiveDate> {
        match parse_date(value) {
            Some(date) => Some(date),
            None => {
                self.reject(param, msg);
                None
            }
        }
    }

    /// Errors collected so far, if any
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Basic structural email check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2 && !host.ends_with('.'),
        None => false,
    }
}

/// Canonical form used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parse a calendar date, accepting a full RFC 3339 timestamp as well
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
