//! Classifier error types

use thiserror::Error;

/// Errors that can occur while setting up a classifier
///
/// Classification itself never fails: unrecognized claims degrade to a
/// disputed verdict.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid claim signature
    #[error("Invalid signature '{name}': {reason}")]
    Signature {
        /// Signature name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// TOML parse or serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ClassifierError {
    fn from(e: toml::de::Error) -> Self {
        ClassifierError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ClassifierError {
    fn from(e: toml::ser::Error) -> Self {
        ClassifierError::Toml(e.to_string())
    }
}
