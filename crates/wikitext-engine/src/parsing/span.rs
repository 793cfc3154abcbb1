use std::ops::Range;

/// A byte range `[start, end)` into the page source.
///
/// Every parsed node stores the span of the source text that produced it,
/// including its own markup, so `&source[span.range()]` reproduces the exact
/// text and edited fragments can be spliced back in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // inverted spans never underflow
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn containment_is_inclusive_at_both_ends() {
        let outer = Span::new(2, 10);
        assert!(outer.contains(Span::new(2, 10)));
        assert!(outer.contains(Span::new(4, 4)));
        assert!(!outer.contains(Span::new(1, 5)));
        assert!(!outer.contains(Span::new(9, 11)));
    }

    #[test]
    fn slices_source() {
        let src = "= title";
        assert_eq!(&src[Span::new(2, 7).range()], "title");
    }
}
