/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the bearer token and
 * hands the user ID to handlers through request extensions.
 *
 * # Token Sources
 *
 * 1. `Authorization: Bearer <token>`
 * 2. `x-auth-token: <token>` (legacy clients)
 *
 * Every failure (no token, malformed, bad signature, expired) is answered
 * with the same `401 {"msg": "Auth error"}`; the cause is only logged.
 * A verified token is trusted as-is, without looking the user up.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Legacy token header
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Read the raw token from the request headers
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.trim().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
        });

    bearer
        .or_else(|| {
            headers
                .get(AUTH_TOKEN_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
        })
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the request headers
/// 2. Verifies signature and expiry
/// 3. Attaches the user ID to request extensions for use in handlers
///
/// Returns 401 if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("No token on {} {}", request.method(), request.uri().path());
        BackendError::Unauthenticated
    })?;

    let claims = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user.id,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers on private routes take this as a parameter. Used on a route
/// without `auth_middleware`, it rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
