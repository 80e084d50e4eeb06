use anyhow::Context;
use happy_config::HappyConfig;

/// Load layered config (`.env`, TOML files, `HAPPY_*` env) and reject unusable values.
pub fn load_config() -> anyhow::Result<HappyConfig> {
    let config = HappyConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}
