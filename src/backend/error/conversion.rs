/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Field-level failures are returned as a list:
 * ```json
 * { "errors": [ { "param": "email", "msg": "Please include a valid email" } ] }
 * ```
 *
 * Everything else carries a single message:
 * ```json
 * { "msg": "user not authorized" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = match self.field_errors() {
            Some(errors) => json!({ "errors": errors }),
            None => json!({ "msg": self.message() }),
        };

        (status, Json(body)).into_response()
    }
}
