//! Token-range references.

/// A reference to a token range within a [`Doc`](crate::Doc).
///
/// Both indices are inclusive and refer to token positions (not character positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanRef {
    /// Inclusive start token index
    pub start_idx: usize,
    /// Inclusive end token index
    pub end_idx: usize,
}

impl SpanRef {
    /// Create a new span reference.
    pub fn new(start_idx: usize, end_idx: usize) -> Self {
        Self { start_idx, end_idx }
    }

    /// Span covering a single token.
    pub fn single(idx: usize) -> Self {
        Self::new(idx, idx)
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end_idx + 1 - self.start_idx
    }

    /// Spans always cover at least one token.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start_idx <= idx && idx <= self.end_idx
    }

    /// True when the two spans share at least one token.
    pub fn overlaps(&self, other: &SpanRef) -> bool {
        self.start_idx <= other.end_idx && other.start_idx <= self.end_idx
    }
}
