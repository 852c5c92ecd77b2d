//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; `run` in the crate
//! root maps the variants to exit codes, so handlers propagate with `?`
//! instead of printing and exiting themselves.

use felt_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O failure while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command-line arguments or user input that fails validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment variable problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An engine operation refused the request.
    #[error("engine error: {0}")]
    Engine(String),

    /// Input closed while the session still needed it.
    #[error("interrupted: {0}")]
    Interrupted(String),
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        CliError::Engine(e.to_string())
    }
}
