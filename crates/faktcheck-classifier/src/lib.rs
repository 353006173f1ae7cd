//! Faktcheck Classifier
//!
//! Assigns verdicts to candidate claims.
//!
//! The Classifier provides:
//! - Temporal assessment (first year 1900–2099 in the claim, aged against the current year)
//! - Claim-shape recognition via an ordered, first-match-wins signature table
//! - Source attribution with trust tiers
//! - A soft "no reliable source" verdict for anything it does not recognize
//!
//! # Examples
//!
//! ```
//! use faktcheck_classifier::{Classifier, ClassifierConfig};
//! use faktcheck_domain::VerdictStatus;
//!
//! let classifier = Classifier::new(ClassifierConfig::default()).unwrap();
//! let verdict = classifier.classify("Deutschland hat 83 Millionen Einwohner", 2025);
//!
//! assert_eq!(verdict.status, VerdictStatus::Verified);
//! assert_eq!(verdict.sources[0].name, "Statistisches Bundesamt");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod signature;
mod temporal;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use signature::{
    default_signatures, ClaimSignature, Matcher, VerdictTemplate, NO_SOURCE_INTERPRETATION,
};
pub use temporal::{assess_text, extract_year};
