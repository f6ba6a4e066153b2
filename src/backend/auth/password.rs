/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so they run on the
 * blocking thread pool instead of stalling the async workers.
 */

use thiserror::Error;

/// Password hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored hash
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash `password` with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check `password` against a stored bcrypt hash
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

/// Hash compared against when a login names an unknown account
///
/// It is created on first use at the configured cost, so a miss costs the
/// same bcrypt work as a wrong password.
#[derive(Debug)]
pub struct DummyHash {
    cost: u32,
    hash: tokio::sync::OnceCell<String>,
}

impl DummyHash {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            hash: tokio::sync::OnceCell::new(),
        }
    }

    /// Verify `password` against the dummy hash; the result is always `false`
    pub async fn verify(&self, password: &str) -> Result<bool, PasswordError> {
        let hash = self
            .hash
            .get_or_try_init(|| hash_password("devconnector-unknown-account", self.cost))
            .await?;
        verify_password(password, hash).await?;
        Ok(false)
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.hash.initialized()
    }
}
