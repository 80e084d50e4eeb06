use serde::{Deserialize, Serialize};

/// Which sentiment scorer enrichment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentStrategy {
    /// Positive/negative keyword counts.
    #[default]
    Keyword,
    /// Word-valence lexicon.
    Lexicon,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SentimentConfig {
    #[serde(default)]
    pub strategy: SentimentStrategy,

    /// Lexicon file for the `lexicon` strategy. The built-in table is used when unset.
    #[serde(default)]
    pub lexicon_path: Option<String>,
}
