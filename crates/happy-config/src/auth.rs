//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Signing key shipped as the default. Fine for local use, never for production.
pub const INSECURE_DEFAULT_KEY: &str = "default_insecure_key";

fn default_secret_key() -> String {
    INSECURE_DEFAULT_KEY.to_string()
}

/// One minute.
const fn default_session_ttl() -> u64 {
    60
}

/// 24 days.
const fn default_cli_ttl() -> u64 {
    24 * 24 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Lifetime of tokens from `happy auth login --session`, in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Lifetime of regular CLI tokens, in seconds.
    #[serde(default = "default_cli_ttl")]
    pub cli_ttl_secs: u64,
}

impl AuthConfig {
    /// Whether the signing key is still the shipped default (or empty).
    pub fn is_insecure(&self) -> bool {
        self.secret_key.is_empty() || self.secret_key == INSECURE_DEFAULT_KEY
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            session_ttl_secs: default_session_ttl(),
            cli_ttl_secs: default_cli_ttl(),
        }
    }
}
