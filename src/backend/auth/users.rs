/**
 * User Model and Credential Store Operations
 *
 * This module handles user documents and their lookups.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::backend::store::{Document, Filter, Store, StoreResult};
use crate::shared::validation::normalize_email;

/// User struct representing a stored account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, normalized)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Avatar image URL
    pub avatar: String,
    /// Created at timestamp
    pub date: DateTime<Utc>,
}

impl Document for User {
    const COLLECTION: &'static str = "users";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email"];

    fn id(&self) -> Uuid {
        self.id
    }
}

impl User {
    /// Build a new user; the email is normalized and the avatar derived from it
    pub fn new(name: &str, email: &str, password_hash: String) -> Self {
        let email = normalize_email(email);
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            avatar: gravatar_url(&email),
            email,
            password_hash,
            date: Utc::now(),
        }
    }
}

/// Gravatar URL for an email (200px, PG rated, mystery-person fallback)
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(normalize_email(email).as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm",
        hex::encode(digest)
    )
}

/// Create a new user
///
/// # Errors
/// `StoreError::Duplicate` if the email is already registered
pub async fn create_user(store: &Store, user: &User) -> StoreResult<()> {
    store.insert(user).await
}

/// Get user by email (normalized before lookup)
pub async fn get_user_by_email(store: &Store, email: &str) -> StoreResult<Option<User>> {
    store
        .find_one(&Filter::eq("email", normalize_email(email)))
        .await
}

/// Get user by ID
pub async fn get_user_by_id(store: &Store, id: Uuid) -> StoreResult<Option<User>> {
    store.find_by_id(id).await
}

/// Delete a user by ID
pub async fn delete_user(store: &Store, id: Uuid) -> StoreResult<bool> {
    store.delete_one::<User>(&Filter::by_id(id)).await
}
