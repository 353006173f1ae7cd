//! Reference facts - the closed table of known-correct data

use crate::source::TrustTier;

/// A known-correct factual datum
///
/// Reference facts are compiled into the binary and never mutated, so the
/// table can be read from any thread without synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFact {
    /// Canonical lookup key (lowercase phrase, e.g. "berlin einwohner")
    pub key: &'static str,

    /// Display value (e.g. "3.7 Millionen")
    pub value: &'static str,

    /// Year the value refers to
    pub year: i32,

    /// Name of the publishing institution
    pub source: &'static str,

    /// Reliability of the source [0.0, 1.0]
    pub trust_score: f64,
}

impl ReferenceFact {
    /// Trust tier of the publishing institution
    pub fn trust_tier(&self) -> TrustTier {
        TrustTier::from_score(self.trust_score)
    }
}

static REFERENCE_FACTS: [ReferenceFact; 5] = [
    ReferenceFact {
        key: "deutschland einwohner",
        value: "83.2 Millionen",
        year: 2023,
        source: "Statistisches Bundesamt",
        trust_score: 0.95,
    },
    ReferenceFact {
        key: "arbeitslosenquote deutschland",
        value: "5.7%",
        year: 2024,
        source: "Bundesagentur für Arbeit",
        trust_score: 0.9,
    },
    ReferenceFact {
        key: "berlin einwohner",
        value: "3.7 Millionen",
        year: 2023,
        source: "Amt für Statistik Berlin-Brandenburg",
        trust_score: 0.9,
    },
    ReferenceFact {
        key: "hamburg einwohner",
        value: "1.9 Millionen",
        year: 2023,
        source: "Statistikamt Nord",
        trust_score: 0.9,
    },
    ReferenceFact {
        key: "münchen einwohner",
        value: "1.5 Millionen",
        year: 2023,
        source: "Statistisches Amt München",
        trust_score: 0.9,
    },
];

/// All reference facts, in table order
pub fn reference_facts() -> &'static [ReferenceFact] {
    &REFERENCE_FACTS
}

/// Look up a reference fact by its canonical key (case-insensitive)
///
/// # Examples
///
/// ```
/// use faktcheck_domain::lookup_fact;
///
/// let fact = lookup_fact("Berlin Einwohner").unwrap();
/// assert_eq!(fact.value, "3.7 Millionen");
/// assert!(lookup_fact("paris einwohner").is_none());
/// ```
pub fn lookup_fact(key: &str) -> Option<&'static ReferenceFact> {
    let key = key.trim().to_lowercase();
    REFERENCE_FACTS.iter().find(|fact| fact.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_five_facts() {
        assert_eq!(reference_facts().len(), 5);
    }

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        let facts = reference_facts();
        for (i, fact) in facts.iter().enumerate() {
            assert_eq!(fact.key, fact.key.to_lowercase());
            assert!(facts[i + 1..].iter().all(|other| other.key != fact.key));
        }
    }

    #[test]
    fn test_trust_scores_in_range() {
        for fact in reference_facts() {
            assert!((0.0..=1.0).contains(&fact.trust_score), "{}", fact.key);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let fact = lookup_fact("MÜNCHEN EINWOHNER").unwrap();
        assert_eq!(fact.source, "Statistisches Amt München");
        assert_eq!(fact.year, 2023);
    }

    #[test]
    fn test_population_fact_is_highly_trustworthy() {
        let fact = lookup_fact("deutschland einwohner").unwrap();
        assert_eq!(fact.trust_tier(), TrustTier::High);
    }
}
