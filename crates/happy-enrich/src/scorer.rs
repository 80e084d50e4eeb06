use std::sync::Arc;

use crate::lexicon::LexiconScorer;

/// Produces a sentiment score in `[-1.0, 1.0]` for a block of text.
///
/// Implementations must return 0.0 for empty input and must not fail.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

const POSITIVE_WORDS: &[&str] = &[
    "great",
    "good",
    "happy",
    "love",
    "awesome",
    "amazing",
    "excellent",
    "wonderful",
    "fantastic",
    "success",
    "proud",
    "glad",
    "excited",
    "enjoy",
    "grateful",
    "thank",
    "nice",
    "best",
    "fun",
    "win",
    "beautiful",
    "calm",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "frustrat",
    "stress",
    "tired",
    "worried",
    "fail",
    "broke",
    "annoy",
    "disappoint",
    "upset",
    "worst",
    "pain",
    "exhaust",
    "lonely",
    "cry",
    "anxious",
];

/// Keyword-count scorer, the default strategy.
///
/// Counts substring occurrences of a fixed positive and negative word list in
/// the lowercased text and returns `(pos - neg) / (pos + neg)`, or exactly 0.0
/// when neither list hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    fn count(lowered: &str, words: &[&str]) -> usize {
        words.iter().map(|word| lowered.matches(word).count()).sum()
    }
}

impl SentimentScorer for KeywordScorer {
    #[allow(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let positive = Self::count(&lowered, POSITIVE_WORDS);
        let negative = Self::count(&lowered, NEGATIVE_WORDS);
        let total = positive + negative;
        if total == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / total as f64
    }
}

/// Strategy chosen at startup.
#[derive(Debug, Clone)]
pub enum Scorer {
    Keyword(KeywordScorer),
    Lexicon(Arc<LexiconScorer>),
}

impl Scorer {
    /// Config-facing strategy name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Lexicon(_) => "lexicon",
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::Keyword(KeywordScorer)
    }
}

impl SentimentScorer for Scorer {
    fn score(&self, text: &str) -> f64 {
        match self {
            Self::Keyword(s) => s.score(text),
            Self::Lexicon(s) => s.score(text),
        }
    }
}
