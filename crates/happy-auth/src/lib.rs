//! # happy-auth
//!
//! Credentials for the GitHappy CLI.
//!
//! Argon2id password hashing, HS256 bearer tokens (`jsonwebtoken`), and token
//! storage in the OS keychain (`keyring`) with env var and file fallbacks.

pub mod claims;
pub mod error;
pub mod password;
pub mod refresh;
pub mod token;
pub mod token_store;

pub use claims::HappyClaims;
pub use error::AuthError;
pub use token::IssuedToken;

/// Resolve the best available auth token.
///
/// Priority: keyring → env var → file.
/// Does NOT validate the token (use [`resolve_and_validate`] for validation).
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Full token resolution with signature and expiry checks.
///
/// Returns validated claims if a token exists and is valid. An expired token
/// resolves to `Ok(None)`.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the stored token is malformed or was
/// signed with a different key.
pub fn resolve_and_validate(secret_key: &str) -> Result<Option<HappyClaims>, AuthError> {
    refresh::check_stored_token(secret_key)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
