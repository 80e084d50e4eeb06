use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `happy` binary.
#[derive(Debug, Parser)]
#[command(
    name = "happy",
    version,
    about = "GitHappy - a git-inspired changelog journal for your life"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Journal database path (overrides db.path from config)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{AdminCommands, AuthCommands, TagCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "happy", "--format", "table", "--limit", "10", "--verbose", "log",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Log(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["happy", "log", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["happy", "--format", "xml", "log"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["happy", "--db", ":memory:", "log"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some(":memory:"));
    }

    #[test]
    fn auth_accepts_bearer_or_subcommand() {
        let cli = Cli::try_parse_from(["happy", "auth", "--bearer", "abc.def.ghi"])
            .expect("cli should parse");
        let Commands::Auth(args) = cli.command else {
            panic!("expected auth");
        };
        assert_eq!(args.bearer.as_deref(), Some("abc.def.ghi"));
        assert!(args.action.is_none());

        let cli = Cli::try_parse_from([
            "happy", "auth", "login", "--username", "demo", "--password", "pw", "--session",
        ])
        .expect("cli should parse");
        let Commands::Auth(args) = cli.command else {
            panic!("expected auth");
        };
        assert!(matches!(args.action, Some(AuthCommands::Login(ref login)) if login.session));

        assert!(
            Cli::try_parse_from(["happy", "auth", "--bearer", "x", "status"]).is_err(),
            "bearer and a subcommand are mutually exclusive"
        );
    }

    #[test]
    fn write_collects_repeated_tags() {
        let cli = Cli::try_parse_from([
            "happy", "write", "--content", "shipped", "--type", "progress", "--tag",
            "tag-00000001", "--tag", "tag-00000002",
        ])
        .expect("cli should parse");
        let Commands::Write(args) = cli.command else {
            panic!("expected write");
        };
        assert_eq!(args.entry_type, "progress");
        assert_eq!(args.tags.len(), 2);
    }

    #[test]
    fn log_year_requires_week() {
        assert!(Cli::try_parse_from(["happy", "log", "--year", "2026"]).is_err());
        assert!(Cli::try_parse_from(["happy", "log", "--week", "3", "--year", "2026"]).is_ok());
    }

    #[test]
    fn nested_commands_parse() {
        let cli = Cli::try_parse_from(["happy", "tag", "create", "work"]).expect("tag create");
        assert!(matches!(cli.command, Commands::Tag { action: TagCommands::Create { .. } }));

        let cli = Cli::try_parse_from(["happy", "admin", "delete-user", "usr-00000001"])
            .expect("admin delete-user");
        assert!(matches!(
            cli.command,
            Commands::Admin { action: AdminCommands::DeleteUser { .. } }
        ));
    }
}
