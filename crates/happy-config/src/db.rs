//! Journal database location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// In-memory database marker accepted by libSQL.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    dirs::home_dir()
        .map(|home| home.join(".githappy").join("journal.db"))
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DbConfig {
    /// Database file path, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl DbConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// The configured path, with a leading `~/` expanded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the path is empty, which
    /// happens when no home directory could be determined for the default.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "db".into(),
                reason: "db.path is empty and no home directory is available".into(),
            });
        }
        if let Some(rest) = self.path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Ok(home.join(rest));
            }
        }
        Ok(PathBuf::from(&self.path))
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lives_under_githappy_dir() {
        let config = DbConfig::default();
        if config.path.is_empty() {
            return;
        }
        assert!(config.path.ends_with("journal.db"));
        assert!(config.path.contains(".githappy"));
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_is_passed_through() {
        let config = DbConfig {
            path: IN_MEMORY.into(),
        };
        assert!(config.is_in_memory());
        assert_eq!(config.resolved_path().unwrap(), PathBuf::from(":memory:"));
    }

    #[test]
    fn empty_path_is_not_configured() {
        let config = DbConfig {
            path: "  ".into(),
        };
        assert!(matches!(
            config.resolved_path(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn tilde_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = DbConfig {
            path: "~/journals/mine.db".into(),
        };
        assert_eq!(config.resolved_path().unwrap(), home.join("journals/mine.db"));
    }
}
