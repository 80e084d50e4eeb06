use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// Create a tag.
    Create { name: String },
    /// List your tags.
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
    },
    /// Delete a tag and detach it from your entries.
    Delete { id: String },
}
