//! HS256 bearer tokens.

use chrono::Utc;
use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::claims::HappyClaims;
use crate::error::AuthError;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Issue a token for `identity` valid for `ttl_secs`.
///
/// # Errors
///
/// Returns `AuthError::Other` if signing fails.
pub fn issue(identity: &AuthIdentity, secret: &str, ttl_secs: u64) -> Result<IssuedToken, AuthError> {
    let now = Utc::now().timestamp();
    let ttl = i64::try_from(ttl_secs)
        .map_err(|_| AuthError::Other(format!("token lifetime {ttl_secs}s is too large")))?;
    let claims = HappyClaims {
        user_id: identity.user_id.clone(),
        username: identity.username.clone(),
        role: identity.role,
        exp: now.saturating_add(ttl),
        iat: now,
    };
    let access_token = sign(&claims, secret)?;
    tracing::debug!(user_id = %identity.user_id, ttl_secs, "issued bearer token");

    Ok(IssuedToken {
        access_token,
        token_type: "bearer".into(),
        expires_in: ttl_secs,
        user_id: identity.user_id.clone(),
        username: identity.username.clone(),
        role: identity.role,
    })
}

/// Sign arbitrary claims. [`issue`] is the normal entry point.
///
/// # Errors
///
/// Returns `AuthError::Other` if encoding fails.
pub fn sign(claims: &HappyClaims, secret: &str) -> Result<String, AuthError> {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Other(format!("failed to sign token: {e}")))
}

/// Verify signature and expiry, returning the claims.
///
/// # Errors
///
/// - `AuthError::TokenExpired` if `exp` is in the past.
/// - `AuthError::InvalidToken` for a bad signature, malformed token, or
///   missing identity claims.
pub fn verify(jwt: &str, secret: &str) -> Result<HappyClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No grace period past `exp`.
    validation.leeway = 0;

    let data = jsonwebtoken::decode::<HappyClaims>(
        jwt.trim(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(e.to_string()),
    })?;

    let claims = data.claims;
    if claims.user_id.is_empty() || claims.username.is_empty() {
        return Err(AuthError::InvalidToken("Invalid token content".into()));
    }
    Ok(claims)
}
