//! Faktcheck Extractor
//!
//! Selects fact-like sentences from free-form text.
//!
//! # Overview
//!
//! The Extractor splits text into sentences on `.`, `!` and `?` and promotes a
//! sentence to a [`Candidate`](faktcheck_domain::Candidate) when it is longer
//! than ten characters and contains statistical phrasing:
//!
//! - a number followed by a unit (Millionen, Milliarden, Prozent, %, €, Dollar, EUR, USD)
//! - a superlative followed by a word (größte, kleinste, höchste, ...)
//! - a comparative: "mehr <word> als" or "weniger <word> als"
//!
//! # Architecture
//!
//! ```text
//! Text → split_sentences → pattern classes → Candidates (capped)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use faktcheck_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
//! let candidates = extractor.extract("Deutschland hat 83 Millionen Einwohner. Hallo Welt.");
//!
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].text, "Deutschland hat 83 Millionen Einwohner");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod patterns;
mod sentences;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use patterns::{is_fact_like, matched_patterns, PatternClass};
pub use sentences::{split_sentences, Sentence};
