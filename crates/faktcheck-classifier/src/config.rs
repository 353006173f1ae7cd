//! Classifier configuration

use crate::ClassifierError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for the staleness threshold
const MAX_THRESHOLD_YEARS: u32 = 100;

/// Configuration for claim classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Data older than this many years is flagged as outdated
    #[serde(alias = "outdatedThresholdYears")]
    pub outdated_threshold_years: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            outdated_threshold_years: 2,
        }
    }
}

impl ClassifierConfig {
    /// Flag anything older than one year
    pub fn strict() -> Self {
        Self {
            outdated_threshold_years: 1,
        }
    }

    /// Tolerate data up to five years old
    pub fn lenient() -> Self {
        Self {
            outdated_threshold_years: 5,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.outdated_threshold_years > MAX_THRESHOLD_YEARS {
            return Err(ClassifierError::Config(format!(
                "outdated_threshold_years must be at most {}",
                MAX_THRESHOLD_YEARS
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
