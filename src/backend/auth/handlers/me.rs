/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind `auth_middleware`; the user ID arrives through
 * the `AuthUser` extractor.
 *
 * # Response
 *
 * Returns user information without the password hash.
 */

use axum::extract::State;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::Json;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - token missing or invalid (raised by the middleware)
/// * `404 Not Found` - the account was deleted after the token was issued
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Alice",
///   "email": "a@x.com",
///   "avatar": "https://www.gravatar.com/avatar/...",
///   "date": "2024-06-01T12:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> BackendResult<Json<UserResponse>> {
    let user = get_user_by_id(&app_state.store, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for missing user: {}", auth.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.into()))
}
