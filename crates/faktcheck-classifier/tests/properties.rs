//! Property tests for claim classification

use faktcheck_classifier::{Classifier, NO_SOURCE_INTERPRETATION};
use faktcheck_domain::{TrustTier, VerdictStatus};
use proptest::prelude::*;

/// Text that cannot contain any built-in signature term
fn unrecognizable_text() -> impl Strategy<Value = String> {
    "[a-gi-z ,.]{0,80}"
}

proptest! {
    #[test]
    fn prop_interpretation_never_empty(claim in ".{0,120}", year in 1900i32..2100) {
        let verdict = Classifier::default_config().classify(&claim, year);
        prop_assert!(!verdict.interpretation.trim().is_empty());
    }

    #[test]
    fn prop_unrecognized_claims_are_disputed(claim in unrecognizable_text()) {
        let verdict = Classifier::default_config().classify(&claim, 2025);
        prop_assert_eq!(verdict.status, VerdictStatus::Disputed);
        prop_assert!(verdict.sources.is_empty());
        prop_assert_eq!(verdict.interpretation.as_str(), NO_SOURCE_INTERPRETATION);
    }

    #[test]
    fn prop_old_years_are_outdated(current in 1950i32..2100, age in 3i32..50) {
        let data_year = current - age;
        prop_assume!(data_year >= 1900);
        let verdict = Classifier::default_config().classify(&format!("Stand {}", data_year), current);
        let temporal = verdict.temporal.unwrap();
        prop_assert_eq!(temporal.data_year, data_year);
        prop_assert!(temporal.is_outdated);
    }

    #[test]
    fn prop_recent_years_are_current(current in 1950i32..2100, age in 0i32..=2) {
        let data_year = current - age;
        let verdict = Classifier::default_config().classify(&format!("Stand {}", data_year), current);
        prop_assert!(!verdict.temporal.unwrap().is_outdated);
    }

    #[test]
    fn prop_high_trust_sources_are_top_tier(claim in prop_oneof![
        Just("Deutschland hat 83 Millionen Einwohner"),
        Just("Die Quote liegt bei 3,5%"),
        Just("Die Wirtschaft wuchs um 10%"),
        Just("Berlin ist größer als Hamburg"),
    ]) {
        let verdict = Classifier::default_config().classify(claim, 2025);
        for source in &verdict.sources {
            let tier = source.trust_tier();
            if source.trust_score >= 0.9 {
                prop_assert_eq!(tier, TrustTier::High);
            }
        }
    }
}
