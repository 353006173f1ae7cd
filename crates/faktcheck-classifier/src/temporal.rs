//! Year extraction for temporal assessment

use faktcheck_domain::TemporalAssessment;
use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("year pattern is valid"));

/// First standalone year between 1900 and 2099 mentioned in the text
///
/// # Examples
///
/// ```
/// use faktcheck_classifier::extract_year;
///
/// assert_eq!(extract_year("Stand 2023, revidiert 2024"), Some(2023));
/// assert_eq!(extract_year("Postleitzahl 120345"), None);
/// ```
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Assess the first year in the text, if any
pub fn assess_text(text: &str, current_year: i32, threshold_years: u32) -> Option<TemporalAssessment> {
    extract_year(text).map(|year| TemporalAssessment::assess(year, current_year, threshold_years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_in_range() {
        assert_eq!(extract_year("im Jahr 1900"), Some(1900));
        assert_eq!(extract_year("bis 2099"), Some(2099));
        assert_eq!(extract_year("(Stand 2023)"), Some(2023));
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(extract_year("im Jahr 1899"), None);
        assert_eq!(extract_year("im Jahr 2100"), None);
        assert_eq!(extract_year("83 Millionen"), None);
    }

    #[test]
    fn test_embedded_digits_are_not_years() {
        assert_eq!(extract_year("Kennung 120199"), None);
        assert_eq!(extract_year("Modell X2020"), None);
    }

    #[test]
    fn test_first_year_wins() {
        assert_eq!(extract_year("2019 und 2023"), Some(2019));
    }

    #[test]
    fn test_assess_text() {
        let assessment = assess_text("Wachstum 2019", 2025, 2).unwrap();
        assert_eq!(assessment.age, 6);
        assert!(assessment.is_outdated);
        assert!(assess_text("ohne Jahr", 2025, 2).is_none());
    }
}
