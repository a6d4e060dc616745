// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::Span;

/// A block of text with attributes applied to ranges within the text.
///
/// Attributes are never applied to arbitrary ranges. A new attribute always wraps the whole
/// current buffer ([`with_new_attribute`](Self::with_new_attribute)), and larger texts are built
/// by [`append`](Self::append)ing smaller ones, which shifts their spans. This keeps spans
/// disjoint or nested.
///
/// None of the operations fail. Indices past the end are clamped and indices inside a UTF-8
/// sequence are moved down to the start of that character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributedText<A> {
    text: String,
    spans: Vec<Span<A>>,
}

impl<A> Default for AttributedText<A> {
    fn default() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
        }
    }
}

impl<A> From<&str> for AttributedText<A> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<A> From<String> for AttributedText<A> {
    fn from(text: String) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }
}

impl<A> AttributedText<A> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            spans: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Borrow the underlying text as `&str`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over all spans in list order.
    ///
    /// List order is not sorted by position: an attribute added with
    /// [`with_new_attribute`](Self::with_new_attribute) comes before all existing spans.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = &Span<A>> {
        self.spans.iter()
    }

    /// Iterate over all attributes and the ranges they apply to, in list order.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &A)> {
        self.spans.iter().map(|span| (span.range(), span.attribute()))
    }

    /// Get an iterator over the attributes that apply at the given `index`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &A> {
        self.spans.iter().filter_map(move |span| {
            if span.range().contains(&index) {
                Some(span.attribute())
            } else {
                None
            }
        })
    }

    /// Get an iterator over the attributes that apply to the given `range`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything.
    pub fn attributes_for_range(&self, range: Range<usize>) -> impl Iterator<Item = &A> {
        self.spans.iter().filter_map(move |span| {
            if (span.start() < range.end) && (span.end() > range.start) {
                Some(span.attribute())
            } else {
                None
            }
        })
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.spans.len()
    }

    /// Remove all applied attribute spans.
    pub fn clear_attributes(&mut self) {
        self.spans.clear();
    }

    /// Remove all text and all spans.
    pub fn clear(&mut self) {
        self.text.clear();
        self.spans.clear();
    }

    /// Append plain text without attributes.
    pub fn append_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append `text` with one span covering exactly the appended bytes.
    pub fn append_with_attribute(&mut self, text: &str, attribute: A) {
        let start = self.text.len();
        self.text.push_str(text);
        self.spans.push(Span::new(start..self.text.len(), attribute));
    }

    /// Wrap the entire current buffer with `attribute`.
    ///
    /// The new span is placed in front of all existing spans, so it opens before them when the
    /// text is [visited](Self::visit).
    pub fn add_new_attribute(&mut self, attribute: A) {
        self.spans.insert(0, Span::new(0..self.text.len(), attribute));
    }

    /// Builder form of [`add_new_attribute`](Self::add_new_attribute).
    #[must_use]
    pub fn with_new_attribute(mut self, attribute: A) -> Self {
        self.add_new_attribute(attribute);
        self
    }
}

impl<A: Clone> AttributedText<A> {
    /// Append another attributed text.
    ///
    /// The other text's spans are shifted by the current length and added after the existing
    /// spans. Existing spans are neither reordered nor merged.
    pub fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans
            .extend(other.spans.iter().map(|span| span.shifted(offset)));
    }

    /// Returns the part of this text starting at byte `start` with up to `length` bytes.
    ///
    /// Both ends of the window snap down to character boundaries independently, so
    /// `substr(0, k)` followed by `substr(k, len - k)` covers the text exactly for any `k`.
    ///
    /// Spans overlapping the window are clipped to it and moved to the new origin; spans wholly
    /// outside are dropped. A window starting past the end yields an empty text.
    #[must_use]
    pub fn substr(&self, start: usize, length: usize) -> Self {
        let end = floor_char_boundary(&self.text, start.saturating_add(length));
        let start = floor_char_boundary(&self.text, start);
        let window = start..end;
        Self {
            text: String::from(&self.text[window.clone()]),
            spans: self
                .spans
                .iter()
                .filter_map(|span| span.clipped(window.clone()))
                .collect(),
        }
    }

    /// Remove up to `length` bytes starting at byte `start`.
    ///
    /// This is the concatenation of the kept prefix and suffix, so the removed range clips
    /// spans exactly as [`substr`](Self::substr) and [`append`](Self::append) do.
    pub fn erase(&mut self, start: usize, length: usize) {
        let end = floor_char_boundary(&self.text, start.saturating_add(length));
        let start = floor_char_boundary(&self.text, start);
        let mut kept = self.substr(0, start);
        kept.append(&self.substr(end, usize::MAX));
        *self = kept;
    }
}

/// Returns the largest character boundary of `text` not greater than `index`.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
