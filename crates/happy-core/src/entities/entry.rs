use chrono::{DateTime, Datelike, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntryType, Gitmoji, Mood};

/// A changelog entry, the journal's equivalent of a commit.
///
/// `sentiment_score` and `gitmojis` start unset and are filled in by
/// `happy-enrich`. `None` / empty means "not computed yet", which is distinct
/// from a computed `0.0`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Entry {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub entry_type: EntryType,
    pub mood: Option<Mood>,
    /// ISO week of `created_at`.
    pub week_number: u32,
    #[serde(default)]
    pub gitmojis: Vec<Gitmoji>,
    pub sentiment_score: Option<f64>,
    /// Tag IDs.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Build an unenriched entry stamped with the current time and ISO week.
    ///
    /// `id` stays empty until the store assigns one.
    #[must_use]
    pub fn new(user_id: impl Into<String>, content: impl Into<String>, entry_type: EntryType) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id: user_id.into(),
            content: content.into(),
            entry_type,
            mood: None,
            week_number: now.iso_week().week(),
            gitmojis: Vec::new(),
            sentiment_score: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: None,
        }
    }

    /// Content prefixed with the entry's marker glyphs, like a gitmoji commit subject.
    #[must_use]
    pub fn formatted_content(&self) -> String {
        if self.gitmojis.is_empty() {
            return self.content.clone();
        }
        let prefix = self
            .gitmojis
            .iter()
            .map(|g| g.glyph())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{prefix} {}", self.content)
    }

    /// ISO week-numbering year of `created_at`, paired with `week_number`.
    #[must_use]
    pub fn iso_year(&self) -> i32 {
        self.created_at.iso_week().year()
    }

    /// Whether both enrichment fields have been filled in.
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.sentiment_score.is_some() && !self.gitmojis.is_empty()
    }
}
