//! CLI response types returned as JSON by `happy` commands.
//!
//! These structs define the shape of output for commands like `happy show
//! --formatted` and `happy admin stats`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Entry;
use crate::enums::EntryType;

/// Response from `happy show <id> --formatted`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FormattedEntry {
    pub id: String,
    pub formatted_content: String,
    pub entry_type: EntryType,
    pub gitmojis: Vec<String>,
    pub sentiment_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<&Entry> for FormattedEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            formatted_content: entry.formatted_content(),
            entry_type: entry.entry_type,
            gitmojis: entry.gitmojis.iter().map(|g| g.glyph().to_string()).collect(),
            sentiment_score: entry.sentiment_score,
            created_at: entry.created_at,
        }
    }
}

/// Response from `happy admin stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystemStats {
    pub users: u64,
    pub entries: u64,
    pub tags: u64,
    pub entry_types: BTreeMap<EntryType, u64>,
}

/// Response from `happy analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisResponse {
    pub entry_type: EntryType,
    pub sentiment_score: f64,
    pub gitmojis: Vec<String>,
    pub formatted_content: String,
}
