//! Database error types for happy-db.

use happy_auth::AuthError;
use happy_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A uniqueness rule was violated (e.g., duplicate username).
    #[error("{0}")]
    Conflict(String),

    /// Not found, forbidden, or invalid input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Password hashing failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::not_found(entity_type, id))
    }

    pub(crate) fn forbidden(action: &str) -> Self {
        Self::Core(CoreError::forbidden(action))
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Core(CoreError::Validation(message.into()))
    }

    /// Whether this is a permission failure.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Core(CoreError::Forbidden { .. }))
    }

    /// Whether this is a missing-row failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
