/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the document store it selects.
 *
 * # Configuration Sources
 *
 * | Variable           | Default          | Meaning                                  |
 * |--------------------|------------------|------------------------------------------|
 * | `JWT_SECRET`       | required         | HMAC secret for session tokens           |
 * | `SERVER_PORT`      | `5000`           | Listen port                              |
 * | `TOKEN_TTL_SECS`   | `360000`         | Token lifetime in seconds                |
 * | `BCRYPT_COST`      | `12`             | bcrypt cost factor (4..=31)              |
 * | `DATABASE_URL`     | unset            | PostgreSQL URL; unset uses memory store  |
 * | `STORE_TIMEOUT_MS` | `5000`           | Bound on each store call                 |
 *
 * A missing signing secret is fatal: the server refuses to start rather
 * than sign tokens with a guessable default.
 */

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_SECS;
use crate::backend::store::{MemoryStore, PgStore, Store, StoreError};

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default store call bound in milliseconds
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Bound on each store call
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let port = parse_or(&get, "SERVER_PORT", DEFAULT_PORT)?;
        let token_ttl_secs = parse_or(&get, "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let bcrypt_cost = parse_or(&get, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        let store_timeout_ms = parse_or(&get, "STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?;

        if token_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "TOKEN_TTL_SECS",
                value: token_ttl_secs.to_string(),
            });
        }
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            port,
            jwt_secret,
            token_ttl_secs,
            bcrypt_cost,
            database_url: get("DATABASE_URL"),
            store_timeout: Duration::from_millis(store_timeout_ms),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

/// Open the document store selected by the configuration
///
/// With `DATABASE_URL` set, connects to PostgreSQL and runs migrations;
/// connection failures are returned to the caller. Without it, an
/// in-memory store is used and nothing survives a restart.
pub async fn load_store(config: &ServerConfig) -> Result<Store, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open database: {:?}", e);
                e
            })?;
            Ok(Store::new(Arc::new(store), config.store_timeout))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
            Ok(Store::new(Arc::new(MemoryStore::new()), config.store_timeout))
        }
    }
}
