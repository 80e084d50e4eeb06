use clap::{Args, Subcommand};

/// Credential commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with a username and password.
    Login(AuthLoginArgs),
    /// Create a writer account.
    Register(AuthRegisterArgs),
    /// Show current auth status.
    Status,
    /// Clear stored credentials.
    Logout,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub password: String,
    /// Issue a short-lived session token instead of a long-lived CLI token.
    #[arg(long)]
    pub session: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub password: String,
}
