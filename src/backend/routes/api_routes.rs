/**
 * API Route Table
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - Account registration
 * - `POST /api/auth/login` - Login
 * - `GET  /api/profile` - All profiles
 * - `GET  /api/profile/user/{user_id}` - One user's profile
 *
 * ## Private (behind `auth_middleware`)
 * - `GET    /api/auth` - Current user
 * - `GET    /api/profile/me` - Caller's profile
 * - `POST   /api/profile` - Create or update caller's profile
 * - `DELETE /api/profile` - Delete caller's posts, profile and account
 * - `PUT    /api/profile/{user_id}/experience`
 * - `DELETE /api/profile/{user_id}/experience/{exp_id}`
 * - `PUT    /api/profile/{user_id}/education`
 * - `DELETE /api/profile/{user_id}/education/{edu_id}`
 * - `POST   /api/posts`, `GET /api/posts`
 * - `GET    /api/posts/{id}`, `DELETE /api/posts/{id}`
 * - `PUT    /api/posts/{id}/like`, `PUT /api/posts/{id}/unlike`
 * - `POST   /api/posts/{id}/comment`
 * - `DELETE /api/posts/{id}/comment/{comment_id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::handlers::{
    add_comment, create_post, delete_comment, delete_post, get_post, get_posts, like_post,
    unlike_post,
};
use crate::backend::profile::handlers::{
    add_education, add_experience, delete_account, delete_education, delete_experience,
    get_my_profile, get_profile_by_user, get_profiles, upsert_profile,
};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/profile", get(get_profiles))
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
}

/// Routes that require a valid token
///
/// The auth middleware is attached with `route_layer`, so it only runs for
/// requests that matched one of these routes.
pub fn configure_private_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .route("/api/auth", get(get_me))
        // Profile endpoints
        .route("/api/profile", post(upsert_profile).delete(delete_account))
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile/{user_id}/experience", put(add_experience))
        .route(
            "/api/profile/{user_id}/experience/{exp_id}",
            delete(delete_experience),
        )
        .route("/api/profile/{user_id}/education", put(add_education))
        .route(
            "/api/profile/{user_id}/education/{edu_id}",
            delete(delete_education),
        )
        // Post endpoints
        .route("/api/posts", post(create_post).get(get_posts))
        .route("/api/posts/{id}", get(get_post).delete(delete_post))
        .route("/api/posts/{id}/like", put(like_post))
        .route("/api/posts/{id}/unlike", put(unlike_post))
        .route("/api/posts/{id}/comment", post(add_comment))
        .route("/api/posts/{id}/comment/{comment_id}", delete(delete_comment))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}
