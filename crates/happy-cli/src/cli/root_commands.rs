use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, AuthCommands, TagCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authenticate with a bearer token, or manage credentials.
    Auth(AuthArgs),
    /// Record a new entry.
    Write(WriteArgs),
    /// List your entries, newest first. Works like `git log`.
    Log(LogArgs),
    /// Show a single entry.
    Show(ShowArgs),
    /// Edit an entry.
    Update(UpdateArgs),
    /// Delete an entry.
    Delete(DeleteArgs),
    /// Tags.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Classify and score text without storing it.
    Analyze(AnalyzeArgs),
    /// Administration (admin role only).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

/// Arguments for `happy auth`.
#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct AuthArgs {
    /// Verify and store this bearer token.
    #[arg(long)]
    pub bearer: Option<String>,

    #[command(subcommand)]
    pub action: Option<AuthCommands>,
}

/// Arguments for `happy write`.
#[derive(Clone, Debug, Args)]
pub struct WriteArgs {
    /// Entry text.
    #[arg(short, long)]
    pub content: String,
    /// highlight, bug, reflection, insight, challenge, progress, question
    #[arg(short = 't', long = "type", default_value = "highlight")]
    pub entry_type: String,
    /// happy, neutral, sad, excited, stressed, tired
    #[arg(short, long)]
    pub mood: Option<String>,
    /// Tag ID to attach (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for `happy log`.
#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// Number of entries to skip.
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
    /// Only entries from this ISO week (1-53).
    #[arg(long)]
    pub week: Option<u32>,
    /// ISO year for --week (defaults to the current year).
    #[arg(long, requires = "week")]
    pub year: Option<i32>,
}

/// Arguments for `happy show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
    /// Print the gitmoji-prefixed summary instead of the full record.
    #[arg(long)]
    pub formatted: bool,
}

/// Arguments for `happy update`.
#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(short, long)]
    pub content: Option<String>,
    #[arg(short = 't', long = "type")]
    pub entry_type: Option<String>,
    #[arg(short, long, conflicts_with = "clear_mood")]
    pub mood: Option<String>,
    /// Remove the mood.
    #[arg(long)]
    pub clear_mood: bool,
    /// Replace the tag set (repeatable).
    #[arg(long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,
    /// Detach every tag.
    #[arg(long)]
    pub clear_tags: bool,
}

/// Arguments for `happy delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

/// Arguments for `happy analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(short, long)]
    pub content: String,
    #[arg(short = 't', long = "type", default_value = "highlight")]
    pub entry_type: String,
}
