/**
 * JSON Extractor
 *
 * Drop-in replacement for `axum::Json` whose rejection is a
 * `BackendError`. A body that is missing its content type, is not JSON,
 * or does not fit the request type is answered like any other validation
 * failure:
 *
 * ```json
 * { "errors": [ { "param": "body", "msg": "Request body is not valid JSON" } ] }
 * ```
 *
 * As a response it serializes exactly like `axum::Json`.
 */

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::backend::error::BackendError;

/// JSON request body or response payload
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(inner: T) -> Self {
        Self(inner)
    }
}
