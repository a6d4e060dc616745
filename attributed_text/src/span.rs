// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A half-open byte range of an [`AttributedText`] tagged with one attribute.
///
/// Spans of one text are expected to be either disjoint or strictly nested. Nothing checks this
/// at runtime; the operations on [`AttributedText`] only ever create spans that wrap the whole
/// buffer or shift and clip existing ones, which preserves the property.
///
/// [`AttributedText`]: crate::AttributedText
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span<A> {
    start: usize,
    end: usize,
    attribute: A,
}

impl<A> Span<A> {
    /// Creates a span covering `range`.
    ///
    /// A reversed range is collapsed to an empty span at its start.
    pub fn new(range: Range<usize>, attribute: A) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
            attribute,
        }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the covered byte range.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the attribute.
    #[inline]
    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    /// Returns `true` if `other` lies entirely inside this span.
    #[must_use]
    pub fn contains_span<B>(&self, other: &Span<B>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two spans overlap without one containing the other.
    #[must_use]
    pub fn crosses<B>(&self, other: &Span<B>) -> bool {
        let overlap = self.start < other.end && other.start < self.end;
        overlap && !self.contains_span(other) && !other.contains_span(self)
    }

    pub(crate) fn shifted(&self, offset: usize) -> Self
    where
        A: Clone,
    {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            attribute: self.attribute.clone(),
        }
    }

    /// Clips the span to `window` and moves it to the window's origin.
    ///
    /// Returns `None` if the span lies wholly outside the window. A span that merely touches the
    /// window's edge is outside, except for empty spans inside an empty window.
    pub(crate) fn clipped(&self, window: Range<usize>) -> Option<Self>
    where
        A: Clone,
    {
        let inside = if self.is_empty() || window.is_empty() {
            self.start >= window.start && self.end <= window.end
        } else {
            self.start < window.end && self.end > window.start
        };
        if !inside {
            return None;
        }
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        Some(Self {
            start: start - window.start,
            end: end - window.start,
            attribute: self.attribute.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn reversed_range_collapses() {
        #[expect(
            clippy::reversed_empty_ranges,
            reason = "We want an invalid range for testing."
        )]
        let span = Span::new(4..3, ());
        assert_eq!(span.range(), 4..4);
        assert!(span.is_empty());
    }

    #[test]
    fn clipping() {
        let span = Span::new(2..8, 'a');
        assert_eq!(span.clipped(0..5).map(|s| s.range()), Some(2..5));
        assert_eq!(span.clipped(4..6).map(|s| s.range()), Some(0..2));
        assert_eq!(span.clipped(8..10), None);
        assert_eq!(span.clipped(0..2), None);
    }

    #[test]
    fn crossing() {
        let outer = Span::new(0..10, ());
        let inner = Span::new(2..4, ());
        let other = Span::new(5..12, ());
        assert!(!outer.crosses(&inner));
        assert!(!inner.crosses(&outer));
        assert!(outer.crosses(&other));
        assert!(!inner.crosses(&other));
    }
}
