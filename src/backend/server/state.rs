/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the only state shared between requests:
 * - the document store (users, profiles, posts)
 * - the token service (signing secret and lifetime)
 * - the bcrypt cost used for new passwords, and a dummy hash at that cost
 *   for logins that name no account
 *
 * # Thread Safety
 *
 * `Store` is a cheap clone around an `Arc<dyn DocumentStore>`, and the
 * token service is behind an `Arc`, so cloning `AppState` per request
 * never copies data.
 *
 * # Example
 *
 * ```rust
 * use devconnector::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(app_state): State<AppState>) {
 *     let _store = &app_state.store;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::DummyHash;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::Store;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Document store for all collections
    pub store: Store,

    /// Token issuing and verification
    pub tokens: Arc<TokenService>,

    /// bcrypt cost factor applied at registration
    pub bcrypt_cost: u32,

    /// Stand-in hash for unknown login emails
    pub dummy_hash: Arc<DummyHash>,
}

impl AppState {
    pub fn new(store: Store, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            bcrypt_cost,
            dummy_hash: Arc::new(DummyHash::new(bcrypt_cost)),
        }
    }
}

/// Allows handlers to take `State<Store>` directly
impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allows handlers to take `State<Arc<TokenService>>` directly
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
