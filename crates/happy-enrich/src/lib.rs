//! # happy-enrich
//!
//! Entry enrichment for GitHappy: tone-aware gitmoji classification and
//! sentiment scoring.
//!
//! Enrichment only fills fields the caller left unset. An entry with a
//! `sentiment_score` keeps it; an entry with markers keeps them. Running
//! [`enrich`] twice is the same as running it once.

pub mod classifier;
pub mod error;
pub mod lexicon;
mod patterns;
pub mod scorer;

use std::path::Path;

use happy_core::entities::Entry;

pub use classifier::{MAX_GITMOJIS, analyze_content};
pub use error::EnrichError;
pub use lexicon::{LexiconScorer, shared_lexicon};
pub use scorer::{KeywordScorer, Scorer, SentimentScorer};

/// Enrich with the default keyword scorer.
#[must_use]
pub fn enrich(entry: Entry) -> Entry {
    enrich_with(entry, &KeywordScorer)
}

/// Enrich with a caller-chosen scorer.
///
/// A score outside `[-1.0, 1.0]` is clamped. A non-finite score is dropped
/// and the field left unset.
#[must_use]
pub fn enrich_with(mut entry: Entry, scorer: &dyn SentimentScorer) -> Entry {
    if entry.sentiment_score.is_none() {
        let score = scorer.score(&entry.content);
        if score.is_finite() {
            entry.sentiment_score = Some(score.clamp(-1.0, 1.0));
        } else {
            tracing::warn!(entry_id = %entry.id, "sentiment scorer returned a non-finite value; leaving score unset");
        }
    }

    if entry.gitmojis.is_empty() {
        entry.gitmojis = analyze_content(&entry.content, entry.entry_type);
    }

    entry
}

/// Owns the scorer selected at startup.
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    scorer: Scorer,
}

impl Enricher {
    #[must_use]
    pub const fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Keyword-count scoring.
    #[must_use]
    pub const fn keyword() -> Self {
        Self::new(Scorer::Keyword(KeywordScorer))
    }

    /// Lexicon scoring, using the process-wide lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError`] if the lexicon file at `path` cannot be loaded.
    pub fn lexicon(path: Option<&Path>) -> Result<Self, EnrichError> {
        Ok(Self::new(Scorer::Lexicon(shared_lexicon(path)?)))
    }

    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    #[must_use]
    pub fn enrich(&self, entry: Entry) -> Entry {
        enrich_with(entry, &self.scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happy_core::enums::{EntryType, Gitmoji};

    struct Broken;

    impl SentimentScorer for Broken {
        fn score(&self, _text: &str) -> f64 {
            f64::NAN
        }
    }

    struct Loud;

    impl SentimentScorer for Loud {
        fn score(&self, _text: &str) -> f64 {
            7.0
        }
    }

    #[test]
    fn non_finite_score_is_left_unset() {
        let entry = enrich_with(Entry::new("usr-1", "great", EntryType::Highlight), &Broken);
        assert!(entry.sentiment_score.is_none());
        assert!(!entry.gitmojis.is_empty());
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let entry = enrich_with(Entry::new("usr-1", "x", EntryType::Highlight), &Loud);
        assert_eq!(entry.sentiment_score, Some(1.0));
    }

    #[test]
    fn enricher_uses_configured_scorer() {
        let enricher = Enricher::lexicon(None).unwrap();
        assert_eq!(enricher.scorer().name(), "lexicon");
        let entry = enricher.enrich(Entry::new("usr-1", "a wonderful day", EntryType::Highlight));
        let score = entry.sentiment_score.unwrap();
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn default_enricher_is_keyword() {
        let entry = Enricher::default().enrich(Entry::new("usr-1", "", EntryType::Bug));
        assert_eq!(entry.sentiment_score, Some(0.0));
        assert_eq!(entry.gitmojis, vec![Gitmoji::Bug]);
    }
}
