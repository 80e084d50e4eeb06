//! # happy-config
//!
//! Layered configuration loading for GitHappy using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HAPPY_*` prefix, `__` as separator)
//! 2. Project-level `.githappy/config.toml`
//! 3. User-level `~/.config/githappy/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HAPPY_AUTH__SECRET_KEY` -> `auth.secret_key`,
//! `HAPPY_DB__PATH` -> `db.path`, etc. The `__` (double underscore) separates
//! nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use happy_config::HappyConfig;
//!
//! let config = HappyConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if config.auth.is_insecure() {
//!     eprintln!("warning: using the default signing key");
//! }
//! ```

mod app;
mod auth;
mod db;
mod error;
mod general;
mod sentiment;

pub use app::AppConfig;
pub use auth::{AuthConfig, INSECURE_DEFAULT_KEY};
pub use db::{DbConfig, IN_MEMORY};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sentiment::{SentimentConfig, SentimentStrategy};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".githappy/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HappyConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

impl HappyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HAPPY_").split("__"))
    }

    /// Reject values that would make tokens unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero token lifetime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.session_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_secs".into(),
                reason: "token lifetime must be at least one second".into(),
            });
        }
        if self.auth.cli_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.cli_ttl_secs".into(),
                reason: "token lifetime must be at least one second".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("githappy").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
