//! Candidate claims found in input text

use std::fmt;

/// Byte range of a sentence within the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A sentence judged "fact-like" by the extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Trimmed sentence text
    pub text: String,

    /// Span of the trimmed text in the original input
    pub span: Span,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(4, 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_span_matches_source_text() {
        let input = "Intro. Deutschland hat 83 Millionen Einwohner.";
        let candidate = Candidate::new("Deutschland hat 83 Millionen Einwohner", Span::new(7, 45));
        assert_eq!(&input[candidate.span.start..candidate.span.end], candidate.text);
    }
}
