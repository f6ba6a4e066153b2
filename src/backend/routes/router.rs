/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Assembly
 *
 * 1. Public routes
 * 2. Private routes, each wrapped by the auth middleware
 * 3. JSON 404 fallback
 * 4. Request tracing
 *
 * Public and private routes may share a path (`/api/profile` has a public
 * GET and private POST/DELETE); merging keeps the middleware on the
 * private methods only.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_private_routes, configure_public_routes};
use crate::backend::server::state::AppState;

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_public_routes(Router::new());
    let private = configure_private_routes(Router::new(), app_state.clone());

    public
        .merge(private)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
