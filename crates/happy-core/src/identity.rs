use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `happy-auth` from a verified bearer token, consumed by
/// `happy-db` for permission checks and by `happy-cli` for display.
/// Contains only data fields, no token logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl AuthIdentity {
    /// Whether this identity owns a record belonging to `owner_id` or is an admin.
    #[must_use]
    pub fn owns_or_admin(&self, owner_id: &str) -> bool {
        self.user_id == owner_id || self.role.is_admin()
    }
}
