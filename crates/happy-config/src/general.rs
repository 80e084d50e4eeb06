//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for `happy log` and other list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Create the `demo` / `password123` account on startup if it is missing.
    #[serde(default)]
    pub seed_demo_user: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            seed_demo_user: false,
        }
    }
}
