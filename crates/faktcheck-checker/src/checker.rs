//! The end-to-end check operation.

use crate::config::CheckerConfig;
use crate::delay::{Delay, FixedDelay};
use crate::error::CheckError;
use chrono::Datelike;
use faktcheck_classifier::Classifier;
use faktcheck_domain::{Candidate, CheckReport};
use faktcheck_extractor::Extractor;
use tracing::{debug, info, warn};

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Runs extraction and classification over a text
///
/// Each check suspends once on the configured [`Delay`] and then runs the
/// extractor and classifier synchronously. The checker holds no state between
/// checks.
#[derive(Debug, Clone)]
pub struct FactChecker<D = FixedDelay> {
    extractor: Extractor,
    classifier: Classifier,
    delay: D,
}

impl FactChecker<FixedDelay> {
    /// Create a checker from configuration
    pub fn new(config: CheckerConfig) -> Result<Self, CheckError> {
        let delay = if config.simulate_delay {
            FixedDelay::default()
        } else {
            FixedDelay::none()
        };

        Ok(Self {
            extractor: Extractor::new(config.extractor)?,
            classifier: Classifier::new(config.classifier)?,
            delay,
        })
    }

    /// Create a checker with default configuration
    pub fn default_config() -> Self {
        Self {
            extractor: Extractor::default_config(),
            classifier: Classifier::default_config(),
            delay: FixedDelay::default(),
        }
    }
}

impl<D: Delay> FactChecker<D> {
    /// Replace the delay
    pub fn with_delay<E: Delay>(self, delay: E) -> FactChecker<E> {
        FactChecker {
            extractor: self.extractor,
            classifier: self.classifier,
            delay,
        }
    }

    /// Replace the classifier (e.g. one with custom signatures)
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// The extractor in use
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// The classifier in use
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Candidates the check would classify, without delay or classification
    pub fn extract(&self, text: &str) -> Vec<Candidate> {
        self.extractor.extract(text)
    }

    /// Check a text
    ///
    /// # Arguments
    ///
    /// * `text` - Raw input text
    /// * `current_year` - Calendar year for temporal assessment
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::EmptyInput`] for blank text (before any delay)
    /// and [`CheckError::NoCandidatesFound`] when nothing is checkable.
    pub async fn check(&self, text: &str, current_year: i32) -> Result<CheckReport, CheckError> {
        if text.trim().is_empty() {
            return Err(CheckError::EmptyInput);
        }

        info!("Starting check of {} bytes (year {})", text.len(), current_year);

        self.delay.wait().await;

        let candidates = self.extractor.extract(text);
        if candidates.is_empty() {
            warn!("No checkable claims found");
            return Err(CheckError::NoCandidatesFound);
        }

        debug!("Classifying {} candidates", candidates.len());
        let verdicts = self.classifier.classify_all(&candidates, current_year);
        let report = CheckReport::new(verdicts, current_year);

        info!(
            "Check {} complete: {} verified, {} disputed, {} false",
            report.id,
            report.summary.verified,
            report.summary.disputed,
            report.summary.false_claims
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingDelay(Arc<AtomicUsize>);

    impl Delay for CountingDelay {
        async fn wait(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_delay_runs_once_per_check() {
        let delay = CountingDelay::default();
        let checker = FactChecker::default_config().with_delay(delay.clone());

        checker.check("Deutschland hat 83 Millionen Einwohner.", 2025).await.unwrap();
        assert_eq!(delay.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_input_skips_delay() {
        let delay = CountingDelay::default();
        let checker = FactChecker::default_config().with_delay(delay.clone());

        let result = checker.check("   \n\t", 2025).await;
        assert!(matches!(result, Err(CheckError::EmptyInput)));
        assert_eq!(delay.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let checker = FactChecker::default_config().with_delay(NoDelay);
        let err = checker.check("Hallo Welt.", 2025).await.unwrap_err();
        assert!(matches!(err, CheckError::NoCandidatesFound));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = CheckerConfig::instant();
        config.extractor.max_facts_per_check = 0;
        assert!(matches!(FactChecker::new(config), Err(CheckError::Config(_))));
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
