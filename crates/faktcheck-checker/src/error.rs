//! Error types for the fact checker.

use faktcheck_classifier::ClassifierError;
use faktcheck_extractor::ExtractorError;
use thiserror::Error;

/// Check operation errors
#[derive(Debug, Error)]
pub enum CheckError {
    /// Input text is blank or whitespace-only
    #[error("Bitte fügen Sie einen Text ein, der überprüft werden soll.")]
    EmptyInput,

    /// The text contains no checkable claims
    #[error("Keine überprüfbaren Fakten gefunden")]
    NoCandidatesFound,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// Whether the error describes the input rather than a fault
    ///
    /// Recoverable errors are reported to the user as guidance; anything else
    /// is an internal problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CheckError::EmptyInput | CheckError::NoCandidatesFound)
    }
}

impl From<ExtractorError> for CheckError {
    fn from(e: ExtractorError) -> Self {
        CheckError::Config(e.to_string())
    }
}

impl From<ClassifierError> for CheckError {
    fn from(e: ClassifierError) -> Self {
        CheckError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for CheckError {
    fn from(e: toml::de::Error) -> Self {
        CheckError::Config(format!("Failed to parse TOML: {}", e))
    }
}
