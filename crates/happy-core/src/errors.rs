//! Cross-cutting error types for GitHappy.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AuthError`) are defined in
//! their respective crates. A unified error is deferred to `happy-cli` where
//! all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any GitHappy crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// The caller is authenticated but lacks permission for the operation.
    #[error("You don't have permission to {action}")]
    Forbidden { action: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn forbidden(action: &str) -> Self {
        Self::Forbidden {
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_message_names_the_action() {
        let err = CoreError::forbidden("create entries");
        assert_eq!(err.to_string(), "You don't have permission to create entries");
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::not_found("Entry", "ent-0badf00d");
        assert_eq!(err.to_string(), "Entry not found: ent-0badf00d");
    }
}
