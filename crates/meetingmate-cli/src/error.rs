//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
///
/// The extraction and rendering core never fails on content; everything
/// that can go wrong here is the surrounding I/O and configuration.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
