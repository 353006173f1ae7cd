//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::{is_fact_like, matched_patterns};
use crate::sentences::{split_sentences, Sentence};
use faktcheck_domain::Candidate;
use tracing::debug;

/// The Extractor selects fact-like sentences from free-form text
///
/// Extraction is a pure function of the input text and the configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, validating the configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract candidates from text
    ///
    /// Candidates keep their order of appearance. At most
    /// `max_facts_per_check` are returned; later ones are dropped.
    pub fn extract(&self, text: &str) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = split_sentences(text)
            .into_iter()
            .filter(|sentence| self.is_candidate(sentence))
            .take(self.config.max_facts_per_check)
            .map(|sentence| Candidate::new(sentence.text, sentence.span))
            .collect();

        debug!(
            "Extracted {} candidates from {} bytes of text",
            candidates.len(),
            text.len()
        );

        candidates
    }

    fn is_candidate(&self, sentence: &Sentence<'_>) -> bool {
        if sentence.char_len() <= self.config.min_sentence_length {
            return false;
        }
        if !is_fact_like(sentence.text) {
            return false;
        }

        debug!(
            "Sentence at {}..{} matches {:?}",
            sentence.span.start,
            sentence.span.end,
            matched_patterns(sentence.text)
        );
        true
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::default_config()
    }
}
