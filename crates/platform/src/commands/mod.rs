//! Command implementations.
//!
//! Each command receives the already-loaded settings by reference.

pub mod check;
pub mod show;

/// Result type shared by all commands
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
