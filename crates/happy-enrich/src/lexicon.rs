//! Valence-lexicon sentiment scoring.
//!
//! Each word carries a valence in `[-4.0, 4.0]`. A text's valences are summed
//! and squashed into `[-1.0, 1.0]` with `sum / sqrt(sum^2 + 15)`, the same
//! normalization VADER uses for its compound score. Lexicon files use the
//! VADER layout: one `word<TAB>valence` per line, extra tab-separated columns
//! ignored, blank lines and `#` comments skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::EnrichError;
use crate::scorer::SentimentScorer;

/// Largest absolute valence a word may carry.
pub const MAX_VALENCE: f64 = 4.0;

const NORMALIZATION_ALPHA: f64 = 15.0;

/// Built-in table used when no lexicon file is configured.
const DEFAULT_WORDS: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("appreciate", 1.7),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("fixed", 1.1),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("love", 3.2),
    ("nice", 1.8),
    ("proud", 2.1),
    ("relieved", 1.5),
    ("solved", 1.1),
    ("success", 2.7),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -1.9),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broken", -1.8),
    ("bug", -0.8),
    ("confused", -1.3),
    ("cry", -2.1),
    ("died", -2.6),
    ("disappointed", -1.9),
    ("exhausted", -1.5),
    ("fail", -2.5),
    ("failed", -2.3),
    ("frustrated", -2.4),
    ("grief", -2.2),
    ("hate", -2.7),
    ("hurt", -2.4),
    ("lonely", -1.5),
    ("lost", -1.3),
    ("nasty", -2.6),
    ("pain", -2.3),
    ("sad", -2.1),
    ("sick", -1.7),
    ("stressed", -1.4),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("upset", -1.6),
    ("worried", -1.2),
    ("worst", -3.1),
];

/// Loaded tables keyed by source file. `None` is the built-in table.
type LexiconCache = HashMap<Option<PathBuf>, Arc<LexiconScorer>>;

static SHARED: OnceLock<Mutex<LexiconCache>> = OnceLock::new();

/// Word-valence lexicon scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
}

impl LexiconScorer {
    /// An empty lexicon. Scores every text 0.0 until words are added.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add or replace a word. Valence is clamped to `[-4.0, 4.0]`.
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-MAX_VALENCE, MAX_VALENCE));
    }

    /// Valence of a single word, if present.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Parse a lexicon in the tab-separated VADER layout.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::LexiconParse`] for a line with no valence column,
    /// a valence that is not a finite number, or one outside `[-4.0, 4.0]`.
    pub fn parse(source: &str) -> Result<Self, EnrichError> {
        let mut lexicon = Self::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut columns = line.split('\t');
            let word = columns.next().unwrap_or_default().trim();
            let parse_err = |reason: String| EnrichError::LexiconParse {
                line: idx + 1,
                reason,
            };
            let valence_col = columns
                .next()
                .ok_or_else(|| parse_err(format!("missing valence for '{word}'")))?;
            let valence: f64 = valence_col
                .trim()
                .parse()
                .map_err(|_| parse_err(format!("'{}' is not a number", valence_col.trim())))?;
            if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                return Err(parse_err(format!(
                    "valence {valence} for '{word}' is outside [-{MAX_VALENCE}, {MAX_VALENCE}]"
                )));
            }
            lexicon.insert(word, valence);
        }
        Ok(lexicon)
    }

    /// Read and parse a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::LexiconLoad`] if the file cannot be read, or
    /// [`EnrichError::LexiconParse`] if its contents are malformed.
    pub fn from_path(path: &Path) -> Result<Self, EnrichError> {
        let source = std::fs::read_to_string(path).map_err(|source| EnrichError::LexiconLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&source)?;
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded sentiment lexicon");
        Ok(lexicon)
    }

    /// Summed valence of every known token in `text`.
    fn raw_sum(&self, text: &str) -> f64 {
        tokenize(text)
            .filter_map(|token| self.words.get(&token).copied())
            .sum()
    }
}

impl Default for LexiconScorer {
    /// The built-in table.
    fn default() -> Self {
        let mut lexicon = Self::new();
        for (word, valence) in DEFAULT_WORDS {
            lexicon.insert(word, *valence);
        }
        lexicon
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let sum = self.raw_sum(text);
        if sum.abs() < f64::EPSILON {
            return 0.0;
        }
        let compound = sum / sum.mul_add(sum, NORMALIZATION_ALPHA).sqrt();
        compound.clamp(-1.0, 1.0)
    }
}

/// Lowercased word tokens. Apostrophes stay inside words (`don't`).
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Process-wide lexicon, loaded once per source.
///
/// Each distinct `path` is read from disk on its first request and shared
/// afterwards. `None` selects the built-in table. The load runs under the
/// cache lock, so concurrent first callers parse the file once. A failed load
/// is not cached, so the next call retries.
///
/// # Errors
///
/// Propagates [`LexiconScorer::from_path`] failures.
pub fn shared_lexicon(path: Option<&Path>) -> Result<Arc<LexiconScorer>, EnrichError> {
    let mut cache = SHARED
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let key = path.map(Path::to_path_buf);
    if let Some(lexicon) = cache.get(&key) {
        return Ok(Arc::clone(lexicon));
    }

    let loaded = Arc::new(match path {
        Some(path) => LexiconScorer::from_path(path)?,
        None => LexiconScorer::default(),
    });
    cache.insert(key, Arc::clone(&loaded));
    Ok(loaded)
}
