//! Entry creation input and update builder.

use happy_core::enums::{EntryType, Mood};
use serde::Serialize;

/// Fields a writer supplies when recording an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub content: String,
    pub entry_type: EntryType,
    pub mood: Option<Mood>,
    /// Tag IDs owned by the caller.
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(content: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            content: content.into(),
            entry_type,
            mood: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
    /// `Some(None)` clears the mood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Option<Mood>>,
    /// Replaces the whole tag set when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl EntryUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.entry_type.is_none()
            && self.mood.is_none()
            && self.tags.is_none()
    }
}

pub struct EntryUpdateBuilder(EntryUpdate);

impl EntryUpdateBuilder {
    pub fn new() -> Self {
        Self(EntryUpdate::default())
    }

    pub fn content(mut self, val: impl Into<String>) -> Self {
        self.0.content = Some(val.into());
        self
    }

    pub const fn entry_type(mut self, val: EntryType) -> Self {
        self.0.entry_type = Some(val);
        self
    }

    pub const fn mood(mut self, val: Option<Mood>) -> Self {
        self.0.mood = Some(val);
        self
    }

    pub fn tags(mut self, val: Vec<String>) -> Self {
        self.0.tags = Some(val);
        self
    }

    pub fn build(self) -> EntryUpdate {
        self.0
    }
}

impl Default for EntryUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
