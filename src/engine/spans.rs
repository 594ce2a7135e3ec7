#![forbid(unsafe_code)]

//! Consumed byte ranges of a document
//!
//! Once an occurrence is reported its span is consumed, and no later
//! occurrence (from the same rule or a later one) may overlap it.

use std::ops::Range;

/// Sorted, pairwise-disjoint set of consumed byte ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedSpans {
    spans: Vec<Range<usize>>,
}

impl ConsumedSpans {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `span` shares at least one byte with a consumed range
    pub fn overlaps(&self, span: &Range<usize>) -> bool {
        // First consumed range that ends after `span` starts
        let idx = self.spans.partition_point(|s| s.end <= span.start);
        self.spans.get(idx).is_some_and(|s| s.start < span.end)
    }

    /// Marks `span` as consumed
    ///
    /// `span` must lie inside an unconsumed gap; empty spans are ignored.
    pub fn insert(&mut self, span: Range<usize>) {
        if span.is_empty() {
            return;
        }
        debug_assert!(!self.overlaps(&span));
        let idx = self.spans.partition_point(|s| s.start < span.start);
        self.spans.insert(idx, span);
    }

    /// First unconsumed range at or after `from`, within `0..len`
    ///
    /// The range ends where the next consumed range starts (or at `len`).
    /// Returns `None` once nothing unconsumed is left past `from`.
    pub fn next_gap(&self, from: usize, len: usize) -> Option<Range<usize>> {
        let mut start = from;
        let mut idx = self.spans.partition_point(|s| s.end <= start);
        while let Some(span) = self.spans.get(idx) {
            if span.start > start {
                break;
            }
            start = span.end;
            idx += 1;
        }

        if start >= len {
            return None;
        }
        let end = self.spans.get(idx).map_or(len, |s| s.start);
        Some(start..end)
    }

    /// Number of consumed ranges
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if nothing has been consumed
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_overlaps_nothing() {
        let spans = ConsumedSpans::new();
        assert!(!spans.overlaps(&(0..10)));
        assert!(spans.is_empty());
    }

    #[test]
    fn test_overlap_detection() {
        let mut spans = ConsumedSpans::new();
        spans.insert(5..10);
        spans.insert(20..25);

        assert!(spans.overlaps(&(5..10)));
        assert!(spans.overlaps(&(0..6)));
        assert!(spans.overlaps(&(9..12)));
        assert!(spans.overlaps(&(7..8)));
        assert!(spans.overlaps(&(0..30)));
        assert!(spans.overlaps(&(24..26)));

        // Adjacent ranges do not overlap
        assert!(!spans.overlaps(&(0..5)));
        assert!(!spans.overlaps(&(10..20)));
        assert!(!spans.overlaps(&(25..30)));
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut spans = ConsumedSpans::new();
        spans.insert(20..25);
        spans.insert(0..3);
        spans.insert(10..12);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans.spans, vec![0..3, 10..12, 20..25]);
    }

    #[test]
    fn test_next_gap_without_spans() {
        let spans = ConsumedSpans::new();
        assert_eq!(spans.next_gap(0, 10), Some(0..10));
        assert_eq!(spans.next_gap(4, 10), Some(4..10));
        assert_eq!(spans.next_gap(10, 10), None);
        assert_eq!(spans.next_gap(0, 0), None);
    }

    #[test]
    fn test_next_gap_stops_at_consumed() {
        let mut spans = ConsumedSpans::new();
        spans.insert(3..5);
        spans.insert(8..10);

        assert_eq!(spans.next_gap(0, 12), Some(0..3));
        assert_eq!(spans.next_gap(2, 12), Some(2..3));
        // Starting inside or at a consumed range skips past it
        assert_eq!(spans.next_gap(3, 12), Some(5..8));
        assert_eq!(spans.next_gap(4, 12), Some(5..8));
        assert_eq!(spans.next_gap(9, 12), Some(10..12));
        assert_eq!(spans.next_gap(12, 12), None);
    }

    #[test]
    fn test_next_gap_skips_adjacent_spans() {
        let mut spans = ConsumedSpans::new();
        spans.insert(0..2);
        spans.insert(2..4);
        spans.insert(6..8);

        assert_eq!(spans.next_gap(0, 8), Some(4..6));
        assert_eq!(spans.next_gap(6, 8), None);
    }

    #[test]
    fn test_insert_ignores_empty() {
        let mut spans = ConsumedSpans::new();
        spans.insert(4..4);
        assert!(spans.is_empty());
    }
}
