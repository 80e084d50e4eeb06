use happy_config::{HappyConfig, SentimentStrategy};
use happy_core::enums::Environment;

const SECTIONS: [&str; 5] = ["APP", "AUTH", "DB", "GENERAL", "SENTIMENT"];

/// Emit warnings for risky settings and likely mistyped env var keys that
/// silently fell back to defaults.
pub fn warn_unconfigured(config: &HappyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HappyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.auth.is_insecure() && config.app.environment == Environment::Production {
        warnings.push(
            "auth.secret_key is the built-in default in production. Set HAPPY_AUTH__SECRET_KEY."
                .to_string(),
        );
    }

    for section in SECTIONS {
        let single = format!("HAPPY_{section}_");
        let double = format!("HAPPY_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and field (example: {double}{})",
                key.trim_start_matches(&single)
            ));
        }
    }

    if config.sentiment.strategy == SentimentStrategy::Keyword
        && config.sentiment.lexicon_path.is_some()
    {
        warnings.push(
            "sentiment.lexicon_path is set but sentiment.strategy is keyword; the lexicon is not loaded."
                .to_string(),
        );
    }

    warnings
}
