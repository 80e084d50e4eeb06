//! Entry types, moods, roles, and the gitmoji catalog for GitHappy.
//!
//! Journal enums serialize in `SCREAMING_SNAKE_CASE` (`"HIGHLIGHT"`, `"HAPPY"`).
//! `Gitmoji` serializes as its glyph (`"✨"`), so stored and displayed markers
//! are the same string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Gitmoji
// ---------------------------------------------------------------------------

/// Symbolic mood marker attached to an entry.
///
/// Declaration order is significant: it is the priority order the classifier
/// walks, so a marker declared earlier wins ties. [`Gitmoji::ALL`] mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Gitmoji {
    /// New feature or idea.
    #[serde(rename = "✨")]
    Sparkles,
    /// Bug fix.
    #[serde(rename = "🐛")]
    Bug,
    /// Breaking change.
    #[serde(rename = "💥")]
    Boom,
    /// Performance improvement.
    #[serde(rename = "🚀")]
    Rocket,
    /// Documentation.
    #[serde(rename = "📝")]
    Memo,
    /// New idea.
    #[serde(rename = "💡")]
    Bulb,
    /// Gratitude.
    #[serde(rename = "❤️")]
    Heart,
    /// Energy.
    #[serde(rename = "⚡")]
    Zap,
    /// Celebration.
    #[serde(rename = "🎉")]
    Tada,
    /// Removal.
    #[serde(rename = "🔥")]
    Fire,
    /// Security.
    #[serde(rename = "🔒")]
    Lock,
    /// Work in progress.
    #[serde(rename = "🚧")]
    Construction,
    /// Refactor.
    #[serde(rename = "♻️")]
    Recycle,
    /// Configuration.
    #[serde(rename = "🔧")]
    Wrench,
    /// Mental health.
    #[serde(rename = "🧠")]
    Brain,
    /// Review.
    #[serde(rename = "👀")]
    Eyes,
    /// Confusion.
    #[serde(rename = "💫")]
    Dizzy,
    /// Data and metrics.
    #[serde(rename = "📊")]
    Chart,
    /// Growth and nurturing.
    #[serde(rename = "🌱")]
    Seedling,
    /// World and travel.
    #[serde(rename = "🌍")]
    Globe,
    /// Design and creativity.
    #[serde(rename = "🎨")]
    Art,
    /// Something worth remembering.
    #[serde(rename = "🔖")]
    Bookmark,
    /// Time and waiting.
    #[serde(rename = "⏳")]
    Hourglass,
    /// Effort and resilience.
    #[serde(rename = "💪")]
    Muscle,
    /// Money.
    #[serde(rename = "💰")]
    Money,
}

impl Gitmoji {
    /// Every marker, in catalog order.
    pub const ALL: [Self; 25] = [
        Self::Sparkles,
        Self::Bug,
        Self::Boom,
        Self::Rocket,
        Self::Memo,
        Self::Bulb,
        Self::Heart,
        Self::Zap,
        Self::Tada,
        Self::Fire,
        Self::Lock,
        Self::Construction,
        Self::Recycle,
        Self::Wrench,
        Self::Brain,
        Self::Eyes,
        Self::Dizzy,
        Self::Chart,
        Self::Seedling,
        Self::Globe,
        Self::Art,
        Self::Bookmark,
        Self::Hourglass,
        Self::Muscle,
        Self::Money,
    ];

    /// The emoji glyph, also the serialized form.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sparkles => "✨",
            Self::Bug => "🐛",
            Self::Boom => "💥",
            Self::Rocket => "🚀",
            Self::Memo => "📝",
            Self::Bulb => "💡",
            Self::Heart => "❤️",
            Self::Zap => "⚡",
            Self::Tada => "🎉",
            Self::Fire => "🔥",
            Self::Lock => "🔒",
            Self::Construction => "🚧",
            Self::Recycle => "♻️",
            Self::Wrench => "🔧",
            Self::Brain => "🧠",
            Self::Eyes => "👀",
            Self::Dizzy => "💫",
            Self::Chart => "📊",
            Self::Seedling => "🌱",
            Self::Globe => "🌍",
            Self::Art => "🎨",
            Self::Bookmark => "🔖",
            Self::Hourglass => "⏳",
            Self::Muscle => "💪",
            Self::Money => "💰",
        }
    }

    /// Lowercase name (`"sparkles"`, `"construction"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sparkles => "sparkles",
            Self::Bug => "bug",
            Self::Boom => "boom",
            Self::Rocket => "rocket",
            Self::Memo => "memo",
            Self::Bulb => "bulb",
            Self::Heart => "heart",
            Self::Zap => "zap",
            Self::Tada => "tada",
            Self::Fire => "fire",
            Self::Lock => "lock",
            Self::Construction => "construction",
            Self::Recycle => "recycle",
            Self::Wrench => "wrench",
            Self::Brain => "brain",
            Self::Eyes => "eyes",
            Self::Dizzy => "dizzy",
            Self::Chart => "chart",
            Self::Seedling => "seedling",
            Self::Globe => "globe",
            Self::Art => "art",
            Self::Bookmark => "bookmark",
            Self::Hourglass => "hourglass",
            Self::Muscle => "muscle",
            Self::Money => "money",
        }
    }

    /// Look up a marker by its glyph.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.glyph() == glyph)
    }
}

impl fmt::Display for Gitmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// ---------------------------------------------------------------------------
// EntryType
// ---------------------------------------------------------------------------

/// Kind of changelog entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Highlight,
    Bug,
    Reflection,
    Insight,
    Challenge,
    Progress,
    Question,
}

impl EntryType {
    /// Marker used when no keyword rule matches the entry content.
    #[must_use]
    pub const fn default_gitmoji(self) -> Gitmoji {
        match self {
            Self::Highlight => Gitmoji::Sparkles,
            Self::Bug => Gitmoji::Bug,
            Self::Reflection => Gitmoji::Memo,
            Self::Insight => Gitmoji::Bulb,
            Self::Challenge => Gitmoji::Muscle,
            Self::Progress => Gitmoji::Rocket,
            Self::Question => Gitmoji::Dizzy,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Highlight => "HIGHLIGHT",
            Self::Bug => "BUG",
            Self::Reflection => "REFLECTION",
            Self::Insight => "INSIGHT",
            Self::Challenge => "CHALLENGE",
            Self::Progress => "PROGRESS",
            Self::Question => "QUESTION",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// The writer's self-reported mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Excited,
    Stressed,
    Tired,
}

impl Mood {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "HAPPY",
            Self::Neutral => "NEUTRAL",
            Self::Sad => "SAD",
            Self::Excited => "EXCITED",
            Self::Stressed => "STRESSED",
            Self::Tired => "TIRED",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role carried in bearer tokens.
///
/// `Writer` serializes as `"WRITER"`: regular users create and edit their own
/// entries. Visitors are read-only; admins can act on any user's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    Writer,
    Visitor,
}

impl Role {
    #[must_use]
    pub const fn can_write(self) -> bool {
        !matches!(self, Self::Visitor)
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Writer => "WRITER",
            Self::Visitor => "VISITOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Deployment environment, read from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
    Cli,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
            Self::Cli => "cli",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
