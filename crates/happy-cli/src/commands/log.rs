use happy_core::entities::Entry;
use happy_core::identity::AuthIdentity;
use serde::Serialize;

use crate::cli::root_commands::LogArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// One line of `happy log --format table`.
#[derive(Debug, Serialize)]
struct LogRow {
    id: String,
    date: String,
    entry_type: String,
    mood: Option<String>,
    sentiment_score: Option<f64>,
    summary: String,
}

impl From<&Entry> for LogRow {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            date: entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            entry_type: entry.entry_type.to_string(),
            mood: entry.mood.map(|m| m.to_string()),
            sentiment_score: entry.sentiment_score.map(|s| (s * 100.0).round() / 100.0),
            summary: entry.formatted_content(),
        }
    }
}

/// Handle `happy log`.
pub async fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = require_identity(ctx).await?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let entries = run(args, ctx, &caller, limit).await?;

    match flags.format {
        OutputFormat::Table => {
            let rows = entries.iter().map(LogRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&entries, flags.format),
    }
}

pub(crate) async fn run(
    args: &LogArgs,
    ctx: &AppContext,
    caller: &AuthIdentity,
    limit: u32,
) -> anyhow::Result<Vec<Entry>> {
    let entries = match args.week {
        Some(week) => {
            let all = ctx.service.entries_for_week(caller, week, args.year).await?;
            all.into_iter()
                .skip(args.skip as usize)
                .take(limit as usize)
                .collect()
        }
        None => ctx.service.list_entries(caller, args.skip, limit).await?,
    };
    Ok(entries)
}
