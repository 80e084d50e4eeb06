use base64::Engine as _;

use crate::claims::HappyClaims;
use crate::error::AuthError;

/// Load the stored token and verify it.
///
/// Returns `Some(claims)` if a token is stored and valid.
/// Returns `None` if no token is stored, or the stored token has expired.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the stored token fails verification for
/// any reason other than expiry.
pub fn check_stored_token(secret_key: &str) -> Result<Option<HappyClaims>, AuthError> {
    let Some(jwt) = crate::token_store::load() else {
        return Ok(None);
    };

    match crate::token::verify(&jwt, secret_key) {
        Ok(claims) => Ok(Some(claims)),
        Err(AuthError::TokenExpired) => {
            let expired_at = decode_expiry(&jwt).ok();
            tracing::warn!(
                expired_at = ?expired_at,
                "stored auth token has expired; re-authenticate with `happy auth login`",
            );
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Decode JWT `exp` claim without verifying the token (for status display).
///
/// This is a best-effort check. It does NOT verify the JWT signature.
/// Use [`crate::token::verify`] for full validation.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}
