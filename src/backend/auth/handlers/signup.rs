/**
 * Register Handler
 *
 * This module implements the account registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate every field, collecting all failures
 * 2. Check if a user with the email already exists
 * 3. Hash password using bcrypt
 * 4. Derive the avatar and insert the user
 * 5. Generate a token
 *
 * # Validation
 *
 * - `name` is required
 * - `email` must be well formed
 * - `password` must be at least 6 characters long
 * - `confirmPassword` must equal `password`
 *
 * The pre-check in step 2 only produces the friendly error early; the
 * store's unique-email guard in step 4 is what actually prevents two
 * accounts racing to the same address.
 */

use axum::extract::State;

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email, User};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::Json;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::validation::Validator;

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 6;

fn validate(request: &RegisterRequest) -> Result<(), BackendError> {
    let mut v = Validator::new();
    v.require("name", &request.name, "Name is required");
    v.email("email", &request.email, "Please include a valid email");
    v.min_len(
        "password",
        &request.password,
        MIN_PASSWORD_LEN,
        "Please enter a password with 6 or more characters",
    );
    if request.confirm_password != request.password {
        v.reject("confirmPassword", "Passwords do not match");
    }
    v.finish().map_err(BackendError::from)
}

/// Register handler
///
/// Creates an account and returns a token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - field validation failed, or the email is taken
/// * `500 Internal Server Error` - hashing, storage or signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Alice",
///   "email": "a@x.com",
///   "password": "secret1",
///   "confirmPassword": "secret1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> BackendResult<Json<AuthResponse>> {
    validate(&request).map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        e
    })?;

    if get_user_by_email(&app_state.store, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(BackendError::DuplicateAccount);
    }

    let password_hash = hash_password(&request.password, app_state.bcrypt_cost)
        .await
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            e
        })?;

    let user = User::new(&request.name, &request.email, password_hash);

    create_user(&app_state.store, &user).await.map_err(|e| match e {
        StoreError::Duplicate { .. } => {
            tracing::warn!("Email registered concurrently: {}", user.email);
            BackendError::DuplicateAccount
        }
        other => BackendError::from(other),
    })?;

    let token = app_state.tokens.issue(user.id)?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse { token }))
}
