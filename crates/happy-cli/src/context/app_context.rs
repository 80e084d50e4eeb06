use std::path::Path;

use anyhow::Context;
use happy_config::HappyConfig;
use happy_config::SentimentStrategy;
use happy_db::service::JournalService;
use happy_enrich::Enricher;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: JournalService,
    pub config: HappyConfig,
}

impl AppContext {
    /// Open the journal named by `--db`, falling back to `db.path` from config.
    pub async fn init(config: HappyConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db_path = match &flags.db {
            Some(path) => path.clone(),
            None if config.db.is_in_memory() => happy_config::IN_MEMORY.to_string(),
            None => {
                let resolved = config.db.resolved_path()?;
                ensure_parent_dir(&resolved)?;
                resolved.to_string_lossy().into_owned()
            }
        };

        let enricher = enricher_for(&config)?;
        let service = JournalService::new_local(&db_path, enricher)
            .await
            .with_context(|| format!("failed to open journal database at {db_path}"))?;

        if config.general.seed_demo_user {
            service
                .ensure_demo_user()
                .await
                .context("failed to seed demo user")?;
        }

        Ok(Self { service, config })
    }
}

/// Build the enricher selected by `sentiment.strategy`.
pub fn enricher_for(config: &HappyConfig) -> anyhow::Result<Enricher> {
    match config.sentiment.strategy {
        SentimentStrategy::Keyword => Ok(Enricher::keyword()),
        SentimentStrategy::Lexicon => {
            let path = config.sentiment.lexicon_path.as_deref().map(Path::new);
            Enricher::lexicon(path).context("failed to load sentiment lexicon")
        }
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
