/**
 * Authentication Handler Types
 *
 * Request and response bodies used by the register, login and current
 * user handlers. Request fields default to empty strings so that missing
 * fields reach validation and are reported per field instead of failing
 * JSON extraction as a whole.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Plain password (hashed before storage)
    pub password: String,
    /// Must equal `password`
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. The token carries the user id.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.date,
        }
    }
}
