//! Claim classification logic

use crate::signature::{default_signatures, ClaimSignature, NO_SOURCE_INTERPRETATION};
use crate::temporal::assess_text;
use crate::{ClassifierConfig, ClassifierError};
use faktcheck_domain::{Candidate, Verdict, VerdictStatus};
use std::sync::Arc;
use tracing::debug;

/// The Classifier maps a candidate claim to a verdict
///
/// Signatures are evaluated in order and the first match wins. Claims that
/// match no signature are disputed with an explicit "no source" message.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    signatures: Arc<[ClaimSignature]>,
}

impl Classifier {
    /// Create a new Classifier with the built-in signature table
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self {
            config,
            signatures: default_signatures(),
        })
    }

    /// Create a Classifier with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ClassifierConfig::default(),
            signatures: default_signatures(),
        }
    }

    /// Replace the signature table
    ///
    /// Every signature is validated so that classification can never produce
    /// a verdict without an interpretation.
    pub fn with_signatures(mut self, signatures: Vec<ClaimSignature>) -> Result<Self, ClassifierError> {
        for signature in &signatures {
            signature.validate()?;
        }
        self.signatures = signatures.into();
        Ok(self)
    }

    /// The active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The signature table, in evaluation order
    pub fn signatures(&self) -> &[ClaimSignature] {
        &self.signatures
    }

    /// Classify a claim
    ///
    /// # Arguments
    ///
    /// * `claim` - The claim text
    /// * `current_year` - Calendar year used to age any year found in the claim
    pub fn classify(&self, claim: &str, current_year: i32) -> Verdict {
        let temporal = assess_text(claim, current_year, self.config.outdated_threshold_years);
        let lowered = claim.to_lowercase();

        match self.signatures.iter().find(|s| s.matcher.matches(&lowered)) {
            Some(signature) => {
                debug!("Claim matched signature '{}'", signature.name);
                signature.template.instantiate(claim, temporal)
            }
            None => {
                debug!("Claim matched no signature, marking as disputed");
                Verdict {
                    claim: claim.to_string(),
                    status: VerdictStatus::Disputed,
                    temporal,
                    interpretation: NO_SOURCE_INTERPRETATION.to_string(),
                    correction: None,
                    sources: Vec::new(),
                }
            }
        }
    }

    /// Classify an extracted candidate
    pub fn classify_candidate(&self, candidate: &Candidate, current_year: i32) -> Verdict {
        self.classify(&candidate.text, current_year)
    }

    /// Classify candidates independently, preserving their order
    pub fn classify_all(&self, candidates: &[Candidate], current_year: i32) -> Vec<Verdict> {
        candidates
            .iter()
            .map(|candidate| self.classify_candidate(candidate, current_year))
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{Matcher, VerdictTemplate};
    use faktcheck_domain::{Source, TrustTier};

    const YEAR: i32 = 2025;

    #[test]
    fn test_population_claim_verified() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Deutschland hat 83 Millionen Einwohner", YEAR);

        assert_eq!(verdict.status, VerdictStatus::Verified);
        assert_eq!(verdict.sources.len(), 1);
        assert_eq!(verdict.sources[0].name, "Statistisches Bundesamt");
        assert_eq!(verdict.sources[0].year, 2023);
        assert_eq!(verdict.sources[0].trust_tier(), TrustTier::High);
        assert!(verdict.temporal.is_none());
        assert!(verdict.correction.is_none());
    }

    #[test]
    fn test_superlative_population_claim_verified() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Es ist das Bevölkerungsreichste Land der EU", YEAR);
        assert_eq!(verdict.status, VerdictStatus::Verified);
    }

    #[test]
    fn test_unemployment_claim_disputed() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Die Arbeitslosenquote liegt bei 3,5% (Stand 2023)", YEAR);

        assert_eq!(verdict.status, VerdictStatus::Disputed);
        assert!(verdict.correction.as_deref().unwrap().contains("5,7%"));
        assert_eq!(verdict.sources[0].name, "Bundesagentur für Arbeit");
        let temporal = verdict.temporal.unwrap();
        assert_eq!(temporal.data_year, 2023);
        assert_eq!(temporal.age, YEAR - 2023);
        assert!(!temporal.is_outdated);
    }

    #[test]
    fn test_growth_claim_false() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Die Wirtschaft wuchs 2019 um 10%", YEAR);

        assert_eq!(verdict.status, VerdictStatus::False);
        assert!(verdict.correction.as_deref().unwrap().contains("0,6%"));
        assert_eq!(verdict.sources[0].url, "destatis.de/bip");
        assert!(verdict.temporal.unwrap().is_outdated);
    }

    #[test]
    fn test_growth_needs_both_terms() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Die Preise stiegen um 10%", YEAR);
        assert_eq!(verdict.status, VerdictStatus::Disputed);
        assert!(verdict.sources.is_empty());
    }

    #[test]
    fn test_city_claim_verified_with_medium_trust() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Berlin hat mehr Einwohner als Hamburg", YEAR);

        assert_eq!(verdict.status, VerdictStatus::Verified);
        assert_eq!(verdict.sources[0].trust_score, 0.85);
        assert_eq!(verdict.sources[0].trust_tier(), TrustTier::Medium);
    }

    #[test]
    fn test_first_match_wins() {
        let classifier = Classifier::default_config();
        // Matches both the population and the city signature
        let verdict = classifier.classify("Berlin und Hamburg: 83 Millionen Menschen wuchsen um 10%", YEAR);
        assert_eq!(verdict.sources[0].name, "Statistisches Bundesamt");
    }

    #[test]
    fn test_unrecognized_claim_disputed() {
        let classifier = Classifier::default_config();
        let verdict = classifier.classify("Der Mond ist 384.400 km entfernt", YEAR);

        assert_eq!(verdict.status, VerdictStatus::Disputed);
        assert_eq!(verdict.interpretation, NO_SOURCE_INTERPRETATION);
        assert!(verdict.sources.is_empty());
        assert!(verdict.correction.is_none());
    }

    #[test]
    fn test_threshold_from_config() {
        let classifier = Classifier::new(ClassifierConfig::lenient()).unwrap();
        let verdict = classifier.classify("Die Wirtschaft wuchs 2021 um 10%", YEAR);
        assert!(!verdict.temporal.unwrap().is_outdated);
    }

    #[test]
    fn test_custom_signatures() {
        let signature = ClaimSignature {
            name: "moon".to_string(),
            matcher: Matcher::any_of(["Mond"]),
            template: VerdictTemplate {
                status: VerdictStatus::Verified,
                interpretation: "Die Entfernung stimmt.".to_string(),
                correction: None,
                sources: vec![Source::new("Sternwarte", "example.org", 0.6, 2020)],
            },
        };
        let classifier = Classifier::default_config()
            .with_signatures(vec![signature])
            .unwrap();

        let verdict = classifier.classify("Der Mond ist 384.400 km entfernt", YEAR);
        assert_eq!(verdict.status, VerdictStatus::Verified);
        assert_eq!(verdict.sources[0].trust_tier(), TrustTier::Low);

        // Built-in signatures no longer apply
        let verdict = classifier.classify("Deutschland hat 83 Millionen Einwohner", YEAR);
        assert_eq!(verdict.status, VerdictStatus::Disputed);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        use faktcheck_domain::Span;

        let classifier = Classifier::default_config();
        let candidates = vec![
            Candidate::new("Die Wirtschaft wuchs um 10%", Span::new(0, 27)),
            Candidate::new("Deutschland hat 83 Millionen Einwohner", Span::new(29, 67)),
        ];
        let verdicts = classifier.classify_all(&candidates, YEAR);
        assert_eq!(verdicts[0].status, VerdictStatus::False);
        assert_eq!(verdicts[1].status, VerdictStatus::Verified);
        assert_eq!(verdicts[1].claim, candidates[1].text);
    }
}
