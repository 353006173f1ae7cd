//! Verdicts - the classification result for one candidate

use crate::source::Source;
use std::fmt;

/// Outcome of classifying a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictStatus {
    /// The claim matches the reference data
    Verified,

    /// The claim deviates from the reference data, or no source was found
    Disputed,

    /// The claim contradicts the reference data
    False,
}

impl VerdictStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Verified => "verified",
            VerdictStatus::Disputed => "disputed",
            VerdictStatus::False => "false",
        }
    }

    /// Badge text shown to readers
    pub fn label(&self) -> &'static str {
        match self {
            VerdictStatus::Verified => "Verifiziert",
            VerdictStatus::Disputed => "Umstritten",
            VerdictStatus::False => "Falsch",
        }
    }

    /// Parse a status from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "verified" => Some(VerdictStatus::Verified),
            "disputed" => Some(VerdictStatus::Disputed),
            "false" => Some(VerdictStatus::False),
            _ => None,
        }
    }
}

impl std::str::FromStr for VerdictStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verdict status: {}", s))
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How current the data referenced by a claim is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalAssessment {
    /// Year mentioned in the claim
    pub data_year: i32,

    /// Current year minus data year (negative for future years)
    pub age: i32,

    /// Whether the age exceeds the configured threshold
    pub is_outdated: bool,

    /// Advisory message for readers
    pub message: String,
}

impl TemporalAssessment {
    /// Recommendation attached to outdated data
    pub const RECOMMENDATION: &'static str = "Suchen Sie nach aktuelleren Daten.";

    /// Assess a data year against the current year
    ///
    /// # Examples
    ///
    /// ```
    /// use faktcheck_domain::TemporalAssessment;
    ///
    /// let old = TemporalAssessment::assess(2019, 2025, 2);
    /// assert!(old.is_outdated);
    /// assert_eq!(old.age, 6);
    ///
    /// let recent = TemporalAssessment::assess(2024, 2025, 2);
    /// assert!(!recent.is_outdated);
    /// ```
    pub fn assess(data_year: i32, current_year: i32, threshold_years: u32) -> Self {
        let age = current_year - data_year;
        let is_outdated = i64::from(age) > i64::from(threshold_years);
        let message = if is_outdated {
            format!(
                "Diese Daten sind {} Jahre alt. Aktuellere Zahlen könnten verfügbar sein.",
                age
            )
        } else {
            "Die Daten sind relativ aktuell.".to_string()
        };

        Self {
            data_year,
            age,
            is_outdated,
            message,
        }
    }

    /// Recommendation for readers, if the data is outdated
    pub fn recommendation(&self) -> Option<&'static str> {
        self.is_outdated.then_some(Self::RECOMMENDATION)
    }
}

/// Classification result for one candidate
///
/// Verdicts are immutable after creation. The interpretation is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Original claim text
    pub claim: String,

    /// Classification outcome
    pub status: VerdictStatus,

    /// Temporal assessment, if the claim mentions a year
    pub temporal: Option<TemporalAssessment>,

    /// Explanation of the outcome
    pub interpretation: String,

    /// Corrected statement, if the claim is wrong
    pub correction: Option<String>,

    /// Attributions, in display order
    pub sources: Vec<Source>,
}

impl Verdict {
    /// Whether the verdict is backed by at least one source
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
