/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by every HTTP handler.
 * Each variant maps to exactly one status code and response body, so a
 * request is answered with a single, complete error response.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `Validation` - one or more request fields were rejected (400)
 * - `DuplicateAccount` - the email is already registered (400)
 * - `AlreadyLiked` / `NotLiked` - like state conflicts (400)
 * - `Unauthenticated` - token missing, malformed, forged or expired (401)
 * - `InvalidCredentials` - login failed; the cause is deliberately hidden (401)
 * - `Forbidden` - the requester does not own the resource (403)
 * - `NotFound` - the addressed resource does not exist (404)
 *
 * ## Server errors
 *
 * - `Storage` - the document store failed or timed out (500)
 * - `Internal` - hashing or signing failed (500)
 *
 * Server errors never leak their detail to the client.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::validation::FieldError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use devconnector::backend::error::BackendError;
///
/// let err = BackendError::not_found("no post exists");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request fields failed validation
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Bearer token missing or rejected
    #[error("Auth error")]
    Unauthenticated,

    /// Login email unknown or password wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Requester is not the owner of the resource
    #[error("user not authorized")]
    Forbidden,

    /// Resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Registration email already in use
    #[error("User already exists")]
    DuplicateAccount,

    /// Requester already liked the post
    #[error("post already liked")]
    AlreadyLiked,

    /// Requester has not liked the post
    #[error("post not liked yet")]
    NotLiked,

    /// Document store failure
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Any other server-side failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a not-found error with a client-facing message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error for one field
    pub fn invalid(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(param, msg)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateAccount | Self::AlreadyLiked | Self::NotLiked => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; server errors collapse to a generic one
    pub fn message(&self) -> String {
        match self {
            Self::Storage(_) | Self::Internal(_) => "Server error".to_string(),
            Self::Validation(_) => "Invalid request".to_string(),
            other => other.to_string(),
        }
    }

    /// Field errors carried by this error, if it is rendered as a list
    pub fn field_errors(&self) -> Option<Vec<FieldError>> {
        match self {
            Self::Validation(errors) => Some(errors.clone()),
            Self::DuplicateAccount => Some(vec![FieldError::new("email", self.to_string())]),
            _ => None,
        }
    }
}

/// Parse an id taken from the request path
///
/// A malformed id cannot address any document, so it is reported as
/// `NotFound` with the caller's message rather than as a bad request.
pub fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        tracing::debug!("Malformed id in path: {:?}", raw);
        BackendError::not_found(not_found)
    })
}

impl From<Vec<FieldError>> for BackendError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

/// Request bodies that never reached the handler are reported on `body`
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        let msg = match rejection {
            JsonRejection::MissingJsonContentType(_) => "Content-Type must be application/json",
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
            JsonRejection::JsonDataError(_) => "Request body has invalid fields",
            _ => "Request body could not be read",
        };
        Self::invalid("body", msg)
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) => Self::Internal(err.to_string()),
            _ => Self::Unauthenticated,
        }
    }
}
