//! Faktcheck Checker
//!
//! The single entry point for checking a text: guards the input, pauses for
//! the simulated processing delay, extracts candidates and classifies them.
//!
//! # Example
//!
//! ```no_run
//! use faktcheck_checker::{current_year, CheckerConfig, FactChecker};
//!
//! # async fn example() -> Result<(), faktcheck_checker::CheckError> {
//! let checker = FactChecker::new(CheckerConfig::default())?;
//! let report = checker
//!     .check("Deutschland hat 83 Millionen Einwohner.", current_year())
//!     .await?;
//!
//! println!("{} verified", report.summary.verified);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod checker;
mod config;
mod delay;
mod error;
mod example;

pub use checker::{current_year, FactChecker};
pub use config::CheckerConfig;
pub use delay::{Delay, FixedDelay, NoDelay};
pub use error::CheckError;
pub use example::EXAMPLE_TEXT;
