/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 *
 * 1. Open the document store (PostgreSQL or in-memory)
 * 2. Create the token service from the signing secret
 * 3. Assemble `AppState` and the router
 */

use thiserror::Error;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_store, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Startup failures; all are fatal
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Build the application state described by `config`
pub async fn create_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let store = load_store(config).await?;
    let tokens = TokenService::new(
        &config.jwt_secret,
        chrono::Duration::seconds(config.token_ttl_secs),
    );

    tracing::info!(
        "Tokens expire after {}s, bcrypt cost {}",
        config.token_ttl_secs,
        config.bcrypt_cost
    );

    Ok(AppState::new(store, tokens, config.bcrypt_cost))
}

/// Create the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<axum::Router, StartupError> {
    let app_state = create_state(config).await?;
    Ok(create_router(app_state))
}
