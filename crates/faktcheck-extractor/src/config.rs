//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum number of candidates returned per check
    #[serde(alias = "maxFactsPerCheck")]
    pub max_facts_per_check: usize,

    /// A sentence must be longer than this (in characters) to be a candidate
    #[serde(alias = "minSentenceLength")]
    pub min_sentence_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_facts_per_check == 0 {
            return Err(ExtractorError::Config(
                "max_facts_per_check must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Ten candidates per check, sentences longer than ten characters
    fn default() -> Self {
        Self {
            max_facts_per_check: 10,
            min_sentence_length: 10,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: fewer candidates, longer sentences only
    pub fn strict() -> Self {
        Self {
            max_facts_per_check: 5,
            min_sentence_length: 20,
        }
    }

    /// Lenient preset: more candidates, short sentences allowed
    pub fn lenient() -> Self {
        Self {
            max_facts_per_check: 25,
            min_sentence_length: 5,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_facts_per_check, 10);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::strict().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_zero_cap_is_invalid() {
        let config = ExtractorConfig {
            max_facts_per_check: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_camel_case_alias() {
        let config = ExtractorConfig::from_toml("maxFactsPerCheck = 3").unwrap();
        assert_eq!(config.max_facts_per_check, 3);
        assert_eq!(config.min_sentence_length, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_rejects_zero_cap() {
        assert!(ExtractorConfig::from_toml("max_facts_per_check = 0").is_err());
    }
}
