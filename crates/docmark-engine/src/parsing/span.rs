use serde::Serialize;

/// A byte range `[start, end)` into the text an inline element was parsed from.
///
/// Slicing the source with a span reproduces the raw markup of the element,
/// delimiters included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The raw source text covered by this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
