/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request fields
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Generate a token
 *
 * # Security
 *
 * An unknown email and a wrong password produce the same 401 body, so the
 * response never reveals which accounts exist. An unknown email is still
 * checked against a dummy hash so both paths do the same bcrypt work.
 */

use axum::extract::State;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::Json;
use crate::backend::server::state::AppState;
use crate::shared::validation::Validator;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email malformed or password missing
/// * `401 Unauthorized` - `{"msg": "Invalid credentials"}`
/// * `500 Internal Server Error` - storage, hashing or signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "secret1" }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let mut v = Validator::new();
    v.email("email", &request.email, "Please include a valid email");
    v.require("password", &request.password, "Password is required");
    v.finish()?;

    let Some(user) = get_user_by_email(&app_state.store, &request.email).await? else {
        app_state.dummy_hash.verify(&request.password).await?;
        tracing::warn!("Login for unknown email: {}", request.email);
        return Err(BackendError::InvalidCredentials);
    };

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Wrong password for user: {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = app_state.tokens.issue(user.id)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse { token }))
}
