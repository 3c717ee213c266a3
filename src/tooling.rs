//! Tooling & Integration Layer
//!
//! CLI commands and their text formatting over the project catalog.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, OverrideCommands};
