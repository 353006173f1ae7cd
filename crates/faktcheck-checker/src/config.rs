//! Configuration for a fact check

use crate::CheckError;
use faktcheck_classifier::ClassifierConfig;
use faktcheck_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};

/// Combined extractor and classifier settings
///
/// Serialized flat, so a TOML table reads:
///
/// ```toml
/// max_facts_per_check = 10
/// min_sentence_length = 10
/// outdated_threshold_years = 2
/// simulate_delay = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Extraction settings
    #[serde(flatten)]
    pub extractor: ExtractorConfig,

    /// Classification settings
    #[serde(flatten)]
    pub classifier: ClassifierConfig,

    /// Pause before checking, as the interactive demo does
    #[serde(alias = "simulateDelay")]
    pub simulate_delay: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            classifier: ClassifierConfig::default(),
            simulate_delay: true,
        }
    }
}

impl CheckerConfig {
    /// Defaults without the simulated delay
    pub fn instant() -> Self {
        Self {
            simulate_delay: false,
            ..Self::default()
        }
    }

    /// Validate both halves of the configuration
    pub fn validate(&self) -> Result<(), CheckError> {
        self.extractor.validate()?;
        self.classifier.validate()?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CheckError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
