//! CLI: flags, config, input/output handling
//!
//! This crate provides the `meetingmate` command-line interface.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
