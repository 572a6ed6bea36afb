//! Learning platform - configuration entry point
//!
//! Loads the settings once, then dispatches to the requested command.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use settings::{ConfigResult, EnvSource, Settings};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(code = e.code(), "Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?settings, "Configuration loaded");

    let result = match cli.command {
        Commands::Check => commands::check::execute(&settings),
        Commands::Show(args) => commands::show::execute(args, &settings),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Resolve settings from an explicit env file or the discovered `.env`.
fn load_settings(cli: &Cli) -> ConfigResult<Settings> {
    let source = match &cli.env_file {
        Some(path) => EnvSource::from_env_file(path)?,
        None => EnvSource::discover()?,
    };
    Settings::load_from(&source)
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
