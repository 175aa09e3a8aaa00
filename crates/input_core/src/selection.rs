//! Text selection applied by select-on-focus.

/// A selection over a field value as byte offsets, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Inclusive.
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl SelectionRange {
    /// Create a range, swapping the ends if needed.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The range covering all of `value`.
    #[inline]
    pub fn all(value: &str) -> Self {
        Self::new(0, value.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_reversed_ends() {
        let range = SelectionRange::new(10, 5);
        assert_eq!((range.start, range.end), (5, 10));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn all_spans_byte_length() {
        assert_eq!(SelectionRange::all("héllo"), SelectionRange::new(0, 6));
        assert!(SelectionRange::all("").is_empty());
    }
}
