/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens that identify a
 * user for the duration of a request.
 *
 * Tokens are HS256 JWTs carrying `{ user: { id }, iat, exp }`. They are
 * stateless: there is no server-side revocation list, and a token whose
 * signature verifies and whose expiry has not passed is trusted without
 * any further lookup.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime (100 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 360_000;

/// Identity embedded in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimUser {
    /// User ID
    pub id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    pub user: ClaimUser,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuance and verification failures
///
/// Handlers answer every verification variant with the same `401`; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Not a well-formed token (bad segments, base64, JSON or algorithm)
    #[error("malformed token")]
    Malformed,

    /// Signature does not match the configured secret
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// Embedded expiry has passed
    #[error("token has expired")]
    Expired,

    /// Signing failed
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::SignatureInvalid,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// Issues and verifies session tokens with one shared secret
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with `secret`; tokens live for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user_id`, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            user: ClaimUser { id: user_id },
            iat,
            exp: iat + self.ttl.num_seconds(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
