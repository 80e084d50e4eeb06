use clap::Subcommand;

/// Admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List every user.
    Users,
    /// Counts of users, entries, and tags.
    Stats,
    /// Delete a user with all their entries and tags.
    DeleteUser { id: String },
}
