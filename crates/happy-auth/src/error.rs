use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token found. Please authenticate first.")]
    NotAuthenticated,

    #[error("Token has expired. Run `happy auth login` to get a new one.")]
    TokenExpired,

    #[error("Invalid authentication credentials: {0}")]
    InvalidToken(String),

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
