//! Spans and phone number candidates.

use orbit_common::CountryCode;

/// Half-open byte range `[start, end)` into a scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Create a span, rejecting empty or inverted ranges.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The spanned slice of `text`, if the span fits and lies on char boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

impl From<regex::Match<'_>> for TextSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
        }
    }
}

/// A span believed to hold a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCandidate {
    pub span: TextSpan,
    /// Only known for numbers found by the international parse.
    pub country: Option<CountryCode>,
}

impl PhoneCandidate {
    pub fn local(span: TextSpan) -> Self {
        Self {
            span,
            country: None,
        }
    }
}
