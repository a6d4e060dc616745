// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-based traversal of an [`AttributedText`].
//!
//! [`AttributedText::visit`] walks the text once from start to end and reports plain text
//! chunks interleaved with span start/end events, similar to a SAX parser walking a document.
//! Because spans are disjoint or nested, the events describe a properly nested tree.

use alloc::vec::Vec;

use crate::AttributedText;

/// Receives the events of [`AttributedText::visit`].
///
/// Every callback returns whether the walk should continue. Returning `false` aborts the walk
/// immediately; spans that are open at that point never get an
/// [`end_attribute`](Self::end_attribute) call.
pub trait Visitor<A> {
    /// A chunk of text with no span boundary inside it.
    fn text(&mut self, text: &str) -> bool;

    /// A span starts.
    fn start_attribute(&mut self, attribute: &A) -> bool;

    /// A span ends.
    fn end_attribute(&mut self, attribute: &A) -> bool;
}

impl<A> AttributedText<A> {
    /// Walk the text, reporting text chunks and span boundaries to `visitor`.
    ///
    /// At each position, spans ending there are closed first (most recently opened first), then
    /// spans starting there are opened. Spans starting at the same position open in list order.
    ///
    /// Returns `true` if the walk ran to the end of the text, `false` if the visitor stopped it.
    pub fn visit<V: Visitor<A> + ?Sized>(&self, visitor: &mut V) -> bool {
        let spans: Vec<_> = self.spans().collect();
        let mut order: Vec<usize> = (0..spans.len()).collect();
        // Stable, so list order breaks ties.
        order.sort_by_key(|&ix| spans[ix].start());

        let text = self.as_str();
        let len = text.len();
        let mut pos = 0;
        let mut next = 0;
        let mut open: Vec<usize> = Vec::with_capacity(spans.len());

        loop {
            let mut ix = open.len();
            while ix > 0 {
                ix -= 1;
                if spans[open[ix]].end() <= pos {
                    let id = open.remove(ix);
                    if !visitor.end_attribute(spans[id].attribute()) {
                        return false;
                    }
                }
            }

            let mut opened = false;
            while let Some(&id) = order.get(next) {
                if spans[id].start() > pos {
                    break;
                }
                next += 1;
                open.push(id);
                opened = true;
                if !visitor.start_attribute(spans[id].attribute()) {
                    return false;
                }
            }
            if opened {
                // Empty spans close right where they opened.
                continue;
            }

            let mut stop = len;
            if let Some(&id) = order.get(next) {
                stop = stop.min(spans[id].start());
            }
            for &id in &open {
                stop = stop.min(spans[id].end());
            }
            if stop <= pos {
                break;
            }
            if !visitor.text(&text[pos..stop]) {
                return false;
            }
            pos = stop;
        }
        true
    }
}
