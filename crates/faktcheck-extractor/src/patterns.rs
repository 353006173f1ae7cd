//! Pattern classes that mark a sentence as fact-like

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Kind of statistical phrasing found in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternClass {
    /// A number followed by a unit ("83 Millionen", "3,5%", "12 EUR")
    NumberWithUnit,
    /// A superlative followed by a word ("größte Stadt")
    Superlative,
    /// "mehr <word> als"
    MoreThan,
    /// "weniger <word> als"
    LessThan,
}

impl PatternClass {
    /// All pattern classes, in evaluation order
    pub const ALL: [PatternClass; 4] = [
        PatternClass::NumberWithUnit,
        PatternClass::Superlative,
        PatternClass::MoreThan,
        PatternClass::LessThan,
    ];

    /// Get the pattern class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternClass::NumberWithUnit => "number_with_unit",
            PatternClass::Superlative => "superlative",
            PatternClass::MoreThan => "more_than",
            PatternClass::LessThan => "less_than",
        }
    }

    /// Whether the sentence contains this pattern (case-insensitive)
    pub fn is_match(&self, sentence: &str) -> bool {
        self.regex().is_match(sentence)
    }

    fn regex(&self) -> &'static Regex {
        match self {
            PatternClass::NumberWithUnit => &NUMBER_WITH_UNIT,
            PatternClass::Superlative => &SUPERLATIVE,
            PatternClass::MoreThan => &MORE_THAN,
            PatternClass::LessThan => &LESS_THAN,
        }
    }
}

impl fmt::Display for PatternClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:,\d+)?(?:\.\d+)?\s*(?:Millionen|Milliarden|Prozent|%|€|Dollar|EUR|USD)")
        .expect("number pattern is valid")
});

static SUPERLATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:bevölkerungsreichste|größte|kleinste|höchste|niedrigste|meiste|wenigste)\s+\w+")
        .expect("superlative pattern is valid")
});

static MORE_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mehr\s+\w+\s+als").expect("comparative pattern is valid"));

static LESS_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)weniger\s+\w+\s+als").expect("comparative pattern is valid"));

/// Pattern classes the sentence matches, in evaluation order
pub fn matched_patterns(sentence: &str) -> Vec<PatternClass> {
    PatternClass::ALL
        .into_iter()
        .filter(|class| class.is_match(sentence))
        .collect()
}

/// Whether the sentence matches at least one pattern class
pub fn is_fact_like(sentence: &str) -> bool {
    PatternClass::ALL.iter().any(|class| class.is_match(sentence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_units() {
        for text in [
            "83 Millionen",
            "3,5%",
            "3,5 %",
            "12 Milliarden",
            "40 Prozent",
            "100€",
            "5 Dollar",
            "7 eur",
            "9 USD",
            "1,5.2 millionen",
        ] {
            assert!(PatternClass::NumberWithUnit.is_match(text), "{}", text);
        }
    }

    #[test]
    fn test_number_without_unit() {
        assert!(!PatternClass::NumberWithUnit.is_match("im Jahr 2019"));
        assert!(!PatternClass::NumberWithUnit.is_match("Millionen Menschen"));
    }

    #[test]
    fn test_superlatives() {
        assert!(PatternClass::Superlative.is_match("das bevölkerungsreichste Land"));
        assert!(PatternClass::Superlative.is_match("die Größte Stadt"));
        assert!(PatternClass::Superlative.is_match("die meiste Zeit"));
        assert!(PatternClass::Superlative.is_match("der höchste Berg"));
        assert!(!PatternClass::Superlative.is_match("am größten"));
    }

    #[test]
    fn test_superlative_needs_following_word() {
        assert!(!PatternClass::Superlative.is_match("die kleinste"));
    }

    #[test]
    fn test_comparatives() {
        assert!(PatternClass::MoreThan.is_match("mehr Bewohner als Hamburg"));
        assert!(PatternClass::MoreThan.is_match("MEHR Einwohner ALS"));
        assert!(PatternClass::LessThan.is_match("weniger Geld als früher"));
        assert!(!PatternClass::MoreThan.is_match("mehr als genug"));
        assert!(!PatternClass::LessThan.is_match("weniger als"));
    }

    #[test]
    fn test_matched_patterns_order() {
        let matched = matched_patterns("Berlin hat mit 3,7 Millionen mehr Bewohner als Hamburg");
        assert_eq!(matched, vec![PatternClass::NumberWithUnit, PatternClass::MoreThan]);
    }

    #[test]
    fn test_is_fact_like() {
        assert!(is_fact_like("Deutschland hat 83 Millionen Einwohner"));
        assert!(!is_fact_like("Hallo Welt"));
    }
}
