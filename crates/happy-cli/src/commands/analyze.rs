use happy_config::HappyConfig;
use happy_core::entities::Entry;
use happy_core::enums::EntryType;
use happy_core::responses::AnalysisResponse;
use happy_enrich::Enricher;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::enricher_for;
use crate::output::output;

/// Handle `happy analyze`. Needs neither a token nor the database.
pub fn handle(args: &AnalyzeArgs, flags: &GlobalFlags, config: &HappyConfig) -> anyhow::Result<()> {
    let enricher = enricher_for(config)?;
    let analysis = run(args, &enricher)?;
    output(&analysis, flags.format)
}

fn run(args: &AnalyzeArgs, enricher: &Enricher) -> anyhow::Result<AnalysisResponse> {
    let entry_type: EntryType = parse_enum(&args.entry_type, "type")?;
    let entry = enricher.enrich(Entry::new("", args.content.clone(), entry_type));

    Ok(AnalysisResponse {
        entry_type,
        sentiment_score: entry.sentiment_score.unwrap_or(0.0),
        gitmojis: entry.gitmojis.iter().map(|g| g.glyph().to_string()).collect(),
        formatted_content: entry.formatted_content(),
    })
}
