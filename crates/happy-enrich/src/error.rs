use std::path::PathBuf;

/// Errors from loading enrichment resources.
///
/// Scoring and classification themselves never fail; only the one-time
/// lexicon load can.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Failed to read sentiment lexicon {path}: {source}")]
    LexiconLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sentiment lexicon line {line}: {reason}")]
    LexiconParse { line: usize, reason: String },
}
