use chrono::{DateTime, Utc};
use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;
use serde::{Deserialize, Serialize};

/// Claims carried in a GitHappy bearer token.
///
/// `user_id` and `username` default to empty on decode so a token missing
/// them can be rejected as invalid content rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HappyClaims {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
}

impl HappyClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            role: self.role,
        }
    }

    /// Token expiration time. Out-of-range timestamps collapse to the epoch.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at() <= threshold
    }
}
