//! Check reports - the verdicts of one check run

use crate::verdict::{Verdict, VerdictStatus};
use std::fmt;

/// Unique identifier for a check report based on UUIDv7
///
/// UUIDv7 keeps reports chronologically sortable without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(u128);

impl ReportId {
    /// Generate a new UUIDv7-based ReportId
    ///
    /// # Examples
    ///
    /// ```
    /// use faktcheck_domain::ReportId;
    ///
    /// let id = ReportId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a ReportId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Verdict counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of claims checked
    pub total: usize,
    /// Claims confirmed by reference data
    pub verified: usize,
    /// Claims that deviate or lack a source
    pub disputed: usize,
    /// Claims contradicted by reference data
    pub false_claims: usize,
}

impl CheckSummary {
    /// Tally a list of verdicts
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        verdicts.iter().fold(Self::default(), |mut summary, verdict| {
            summary.total += 1;
            match verdict.status {
                VerdictStatus::Verified => summary.verified += 1,
                VerdictStatus::Disputed => summary.disputed += 1,
                VerdictStatus::False => summary.false_claims += 1,
            }
            summary
        })
    }
}

/// Result of checking one input text
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Report identifier
    pub id: ReportId,

    /// Calendar year used for temporal assessments
    pub current_year: i32,

    /// Verdicts in candidate order
    pub verdicts: Vec<Verdict>,

    /// Counts by status
    pub summary: CheckSummary,
}

impl CheckReport {
    /// Build a report, computing the summary from the verdicts
    pub fn new(verdicts: Vec<Verdict>, current_year: i32) -> Self {
        let summary = CheckSummary::from_verdicts(&verdicts);
        Self {
            id: ReportId::new(),
            current_year,
            verdicts,
            summary,
        }
    }
}
