// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeding resolved runs into the layout.

use alloc::string::String;

use styled_text::resolve::{RunSink, StyleResolver, resolve_text};
use styled_text::{AlignMode, Attribute, Color, FontRequest, RichText};

use super::{AlignBox, Document, KEY_CAP_PADDING};
use crate::{FontMetrics, Item, ItemKind};

/// Adds resolved runs to a document.
struct Flow<'a, M, O> {
    document: &'a mut Document<M, O>,
    breakable: bool,
}

impl<M: FontMetrics, O> RunSink for Flow<'_, M, O> {
    fn handle_part(
        &mut self,
        text: &str,
        font: FontRequest,
        underlined: bool,
        key_cap: bool,
        color: Color,
    ) -> bool {
        let breakable = self.breakable && !key_cap;
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.document.add_newline();
            }
            if line.is_empty() {
                continue;
            }
            let item = Item {
                kind: self.document.run_kind(),
                width: run_width(&self.document.metrics, &font, line, key_cap),
                font,
                color,
                underline: underlined,
                key_cap,
                text: String::from(line),
                breakable,
                ..Item::default()
            };
            self.document.word.push(item);
            self.document.process();
        }
        true
    }

    fn handle_other_attribute(&mut self, attribute: &Attribute, entering: bool) -> bool {
        match (attribute, entering) {
            (Attribute::Link(target), true) => self.document.enter_link(target),
            (Attribute::Link(_), false) => self.document.leave_link(),
            (Attribute::Alignment { width, mode }, true) => {
                self.document.begin_alignment(*width, *mode);
            }
            (Attribute::Alignment { .. }, false) => self.document.end_alignment(),
            (Attribute::Style(_) | Attribute::Color(_), _) => {}
        }
        true
    }
}

/// Measures resolved runs. Line breaks start a new measurement; the widest line counts.
struct Measure<'a, M> {
    metrics: &'a M,
    line: i32,
    widest: i32,
}

impl<M: FontMetrics> RunSink for Measure<'_, M> {
    fn handle_part(
        &mut self,
        text: &str,
        font: FontRequest,
        _underlined: bool,
        key_cap: bool,
        _color: Color,
    ) -> bool {
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.widest = self.widest.max(self.line);
                self.line = 0;
            }
            if !line.is_empty() {
                self.line = self
                    .line
                    .saturating_add(run_width(self.metrics, &font, line, key_cap));
            }
        }
        true
    }

    fn handle_other_attribute(&mut self, _attribute: &Attribute, _entering: bool) -> bool {
        true
    }
}

fn run_width<M: FontMetrics>(metrics: &M, font: &FontRequest, text: &str, key_cap: bool) -> i32 {
    let width = metrics.text_width(font, text);
    if key_cap {
        width.saturating_add(2 * KEY_CAP_PADDING)
    } else {
        width
    }
}

impl<M: FontMetrics, O> Document<M, O> {
    pub(super) fn add_flow(&mut self, text: &RichText, breakable: bool) {
        let mut flow = Flow {
            document: self,
            breakable,
        };
        resolve_text(text, &mut flow);
    }

    /// Width of `text` on one line, or of its widest line.
    pub(super) fn measure(&self, text: &RichText) -> i32 {
        let mut resolver = StyleResolver::new(Measure {
            metrics: &self.metrics,
            line: 0,
            widest: 0,
        });
        text.visit(&mut resolver);
        let measure = resolver.into_sink();
        measure.widest.max(measure.line)
    }

    fn run_kind(&self) -> ItemKind {
        if self.link_depth > 0 {
            ItemKind::Link
        } else {
            ItemKind::Normal
        }
    }

    fn enter_link(&mut self, target: &str) {
        self.word.push(Item {
            kind: ItemKind::LinkTarget,
            text: String::from(target),
            ..Item::default()
        });
        self.link_depth += 1;
    }

    fn leave_link(&mut self) {
        self.link_depth = self.link_depth.saturating_sub(1);
    }

    fn begin_alignment(&mut self, width: i32, mode: AlignMode) {
        self.flush_word();
        self.alignments.push(AlignBox {
            start_x: self.x,
            first_item: self.items.len(),
            line_start: self.line_start,
            width,
            mode,
        });
    }

    /// Closes the innermost alignment box.
    ///
    /// Items in the box are shifted within it if it is still on the line it started on.
    fn end_alignment(&mut self) {
        self.flush_word();
        let Some(align) = self.alignments.pop() else {
            return;
        };
        if align.line_start != self.line_start {
            log::trace!("alignment box was broken across lines");
            return;
        }
        let used = self.x.saturating_sub(align.start_x);
        let pad = align.width.saturating_sub(used);
        if pad > 0 {
            let shift = match align.mode {
                AlignMode::Left => 0,
                AlignMode::Center => pad / 2,
                AlignMode::Right => pad,
            };
            for item in self.items.iter_mut().skip(align.first_item) {
                item.pos.x = item.pos.x.saturating_add(shift);
            }
        }
        self.x = align.start_x.saturating_add(align.width.max(used));
    }
}
