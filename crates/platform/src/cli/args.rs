//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Inspect and validate the learning platform configuration
#[derive(Parser, Debug)]
#[command(name = "learning-platform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to read instead of searching for `.env`
    #[arg(short, long, global = true, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the settings and report whether they are valid
    Check,

    /// Print the effective settings with secrets redacted
    Show(ShowArgs),
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_json_with_env_file() {
        let cli = Cli::try_parse_from([
            "learning-platform",
            "--env-file",
            "conf/.env",
            "show",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.env_file, Some(PathBuf::from("conf/.env")));
        assert!(matches!(cli.command, Commands::Show(ShowArgs { json: true })));
    }

    #[test]
    fn test_parse_check_verbose() {
        let cli = Cli::try_parse_from(["learning-platform", "check", "-v"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }
}
