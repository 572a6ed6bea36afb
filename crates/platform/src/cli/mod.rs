//! CLI module - Command-line interface for the configuration tool.
//!
//! Provides commands for:
//! - `check` - Validate the configuration
//! - `show` - Print the effective settings

pub mod args;

pub use args::{Cli, Commands, ShowArgs};
