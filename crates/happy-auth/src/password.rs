//! Argon2id password hashing.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) with a random salt, so the
//! same password never hashes to the same string twice.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::error::AuthError;

/// Hash `plain` with Argon2id and a fresh salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Check `plain` against a stored PHC hash.
///
/// A wrong password is `Ok(false)`; only a malformed stored hash is an error.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if `hash` is not a valid PHC string.
pub fn verify(plain: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = hash("password123").expect("hash");
        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify("password123", &hashed).expect("verify"));
        assert!(!verify("password124", &hashed).expect("verify"));
    }

    #[test]
    fn salts_differ() {
        let a = hash("same").expect("hash");
        let b = hash("same").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify("password123", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::PasswordHash(_)));
    }
}
