use happy_core::enums::Environment;
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "githappy".to_string()
}

fn default_description() -> String {
    "A git-inspired changelog journal for your life".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application identity and runtime mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter directive used when neither `HAPPY_LOG` nor a
    /// verbosity flag is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            environment: Environment::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AppConfig::default();
        assert_eq!(config.name, "githappy");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "warn");
    }
}
