//! Error types for the CLI application.

use faktcheck_checker::CheckError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Check failed
    #[error("{0}")]
    Check(#[from] CheckError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Line editor failure
    #[error("Editor error: {0}")]
    Editor(String),
}

impl CliError {
    /// Whether the error is guidance about the input rather than a fault
    pub fn is_recoverable(&self) -> bool {
        match self {
            CliError::Check(e) => e.is_recoverable(),
            _ => false,
        }
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        CliError::Editor(e.to_string())
    }
}
