//! Sentence splitting

use faktcheck_domain::Span;
use regex::Regex;
use std::sync::LazyLock;

/// One or more consecutive terminators form a single boundary
static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"));

/// A sentence segment of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Trimmed text of the segment (terminators excluded)
    pub text: &'a str,
    /// Span of the trimmed text in the input
    pub span: Span,
}

impl Sentence<'_> {
    /// Length of the trimmed text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split text into sentences on `.`, `!` and `?`
///
/// Every segment between boundaries is returned, including empty ones, so the
/// result is a faithful partition of the input minus its terminators.
///
/// # Examples
///
/// ```
/// use faktcheck_extractor::split_sentences;
///
/// let sentences = split_sentences("Eins. Zwei?! Drei");
/// let texts: Vec<_> = sentences.iter().map(|s| s.text).collect();
/// assert_eq!(texts, ["Eins", "Zwei", "Drei"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in TERMINATORS.find_iter(text) {
        sentences.push(trimmed(text, start, boundary.start()));
        start = boundary.end();
    }
    sentences.push(trimmed(text, start, text.len()));

    sentences
}

fn trimmed(text: &str, start: usize, end: usize) -> Sentence<'_> {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    let begin = start + leading;

    Sentence {
        text: trimmed,
        span: Span::new(begin, begin + trimmed.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_without_terminator() {
        let sentences = split_sentences("Nur ein Satz");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Nur ein Satz");
        assert_eq!(sentences[0].span, Span::new(0, 12));
    }

    #[test]
    fn test_trailing_terminator_yields_empty_tail() {
        let sentences = split_sentences("Hallo Welt.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Hallo Welt");
        assert_eq!(sentences[1].text, "");
    }

    #[test]
    fn test_terminator_runs_are_one_boundary() {
        let sentences = split_sentences("Wirklich?!... Ja");
        let texts: Vec<_> = sentences.iter().map(|s| s.text).collect();
        assert_eq!(texts, ["Wirklich", "Ja"]);
    }

    #[test]
    fn test_decimal_point_splits() {
        let sentences = split_sentences("Die Quote liegt bei 3.5% laut Amt");
        let texts: Vec<_> = sentences.iter().map(|s| s.text).collect();
        assert_eq!(texts, ["Die Quote liegt bei 3", "5% laut Amt"]);
    }

    #[test]
    fn test_spans_point_into_input() {
        let text = "  Erster Satz!   Zweiter Satz mit Umlauten äöü.  ";
        for sentence in split_sentences(text) {
            assert_eq!(&text[sentence.span.start..sentence.span.end], sentence.text);
        }
    }

    #[test]
    fn test_char_len_counts_umlauts_once() {
        let sentences = split_sentences("größte");
        assert_eq!(sentences[0].char_len(), 6);
        assert_eq!(sentences[0].text.len(), 8);
    }

    #[test]
    fn test_empty_text() {
        let sentences = split_sentences("");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].text.is_empty());
    }
}
