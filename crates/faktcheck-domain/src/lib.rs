//! Faktcheck Domain Layer
//!
//! This crate contains the value objects shared by every other layer of
//! Faktcheck. It carries no I/O and no pattern-matching logic; those live in
//! the extractor and classifier crates.
//!
//! ## Key Concepts
//!
//! - **ReferenceFact**: a known-correct datum from the static reference table
//! - **Candidate**: a sentence from the input that looks like a factual claim
//! - **Source**: attribution attached to a verdict, rated by trust tier
//! - **Verdict**: the classification of one candidate (verified, disputed, false)
//! - **CheckReport**: the ordered verdicts of one check plus a summary
//!
//! ## Architecture
//!
//! ```text
//! Text → Extractor → Candidate → Classifier → Verdict → CheckReport
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod fact;
pub mod report;
pub mod source;
pub mod verdict;

// Re-exports for convenience
pub use candidate::{Candidate, Span};
pub use fact::{lookup_fact, reference_facts, ReferenceFact};
pub use report::{CheckReport, CheckSummary, ReportId};
pub use source::{Source, TrustTier};
pub use verdict::{TemporalAssessment, Verdict, VerdictStatus};
