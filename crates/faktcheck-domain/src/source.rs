//! Source attribution and trust tiers

use std::fmt;

/// Trust tier derived from a source's trust score
///
/// Tiers are never stored alongside a source; they are recomputed from the
/// score every time they are needed:
/// - High: score ≥ 0.9
/// - Medium: 0.7 ≤ score < 0.9
/// - Low: score < 0.7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustTier {
    /// Highly trustworthy
    High,

    /// Trustworthy
    Medium,

    /// Use with caution
    Low,
}

impl TrustTier {
    /// Lower bound (inclusive) of the High tier
    pub const HIGH_THRESHOLD: f64 = 0.9;

    /// Lower bound (inclusive) of the Medium tier
    pub const MEDIUM_THRESHOLD: f64 = 0.7;

    /// Derive the tier for a trust score
    ///
    /// # Examples
    ///
    /// ```
    /// use faktcheck_domain::TrustTier;
    ///
    /// assert_eq!(TrustTier::from_score(0.95), TrustTier::High);
    /// assert_eq!(TrustTier::from_score(0.85), TrustTier::Medium);
    /// assert_eq!(TrustTier::from_score(0.5), TrustTier::Low);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            TrustTier::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            TrustTier::Medium
        } else {
            TrustTier::Low
        }
    }

    /// Short machine-readable name ("high", "medium", "low")
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustTier::High => "high",
            TrustTier::Medium => "medium",
            TrustTier::Low => "low",
        }
    }

    /// Human-readable rating shown next to a source
    pub fn label(&self) -> &'static str {
        match self {
            TrustTier::High => "Sehr vertrauenswürdig",
            TrustTier::Medium => "Vertrauenswürdig",
            TrustTier::Low => "Mit Vorsicht zu genießen",
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attribution attached to a verdict
///
/// A source is created fresh for every classification and is owned by the
/// verdict it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Institution name
    pub name: String,

    /// Reference URL (without scheme, as displayed)
    pub url: String,

    /// Reliability [0.0, 1.0]
    pub trust_score: f64,

    /// Year of the referenced data
    pub year: i32,
}

impl Source {
    /// Create a new source
    pub fn new(name: impl Into<String>, url: impl Into<String>, trust_score: f64, year: i32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            trust_score,
            year,
        }
    }

    /// Trust tier of this source
    pub fn trust_tier(&self) -> TrustTier {
        TrustTier::from_score(self.trust_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(TrustTier::from_score(1.0), TrustTier::High);
        assert_eq!(TrustTier::from_score(0.9), TrustTier::High);
        assert_eq!(TrustTier::from_score(0.8999), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(0.7), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(0.6999), TrustTier::Low);
        assert_eq!(TrustTier::from_score(0.0), TrustTier::Low);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TrustTier::High.label(), "Sehr vertrauenswürdig");
        assert_eq!(TrustTier::Medium.label(), "Vertrauenswürdig");
        assert_eq!(TrustTier::Low.label(), "Mit Vorsicht zu genießen");
        assert_eq!(TrustTier::Medium.as_str(), "medium");
    }

    #[test]
    fn test_source_tier() {
        let source = Source::new("Statistische Ämter der Länder", "statistik-portal.de", 0.85, 2023);
        assert_eq!(source.trust_tier(), TrustTier::Medium);
    }

    proptest! {
        #[test]
        fn prop_high_scores_map_to_high_tier(score in 0.9f64..=1.0) {
            prop_assert_eq!(TrustTier::from_score(score), TrustTier::High);
        }

        #[test]
        fn prop_tier_is_idempotent(score in 0.0f64..=1.0) {
            let source = Source::new("s", "u", score, 2020);
            prop_assert_eq!(source.trust_tier(), source.trust_tier());
            prop_assert_eq!(source.trust_tier(), TrustTier::from_score(score));
        }
    }
}
