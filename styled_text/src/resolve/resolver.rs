// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::Visitor;
use smallvec::SmallVec;

use crate::style::{Attribute, Color, FontRequest, StyleKind};
use crate::RichText;

/// Receives the runs produced by a [`StyleResolver`].
pub trait RunSink {
    /// A chunk of text with fully resolved styling.
    fn handle_part(
        &mut self,
        text: &str,
        font: FontRequest,
        underlined: bool,
        key_cap: bool,
        color: Color,
    ) -> bool;

    /// A non-style attribute (link, alignment) starts or ends.
    fn handle_other_attribute(&mut self, attribute: &Attribute, entering: bool) -> bool;
}

/// Folds style and color attributes into resolved runs.
///
/// Style attributes are counted rather than toggled, so nesting the same style twice and closing
/// it once keeps it active. `Big` and `Small` share one signed size counter.
#[derive(Clone, Debug)]
pub struct StyleResolver<S> {
    sink: S,
    bold: i32,
    size: i32,
    fixed: i32,
    underline: i32,
    key: i32,
    colors: SmallVec<[Color; 4]>,
    default_color: Color,
}

impl<S: RunSink> StyleResolver<S> {
    /// Creates a resolver reporting to `sink`, using the default palette color.
    pub fn new(sink: S) -> Self {
        Self::with_default_color(sink, Color::default())
    }

    /// Creates a resolver reporting to `sink` with the color used outside any color span.
    pub fn with_default_color(sink: S, default_color: Color) -> Self {
        Self {
            sink,
            bold: 0,
            size: 0,
            fixed: 0,
            underline: 0,
            key: 0,
            colors: SmallVec::new(),
            default_color,
        }
    }

    /// Consumes the resolver and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The font for text at the current position.
    pub fn font(&self) -> FontRequest {
        FontRequest {
            size: self.size,
            weight: self.bold,
            fixed: self.fixed > 0,
        }
    }

    /// The color for text at the current position.
    pub fn color(&self) -> Color {
        self.colors.last().copied().unwrap_or(self.default_color)
    }

    /// Whether text at the current position is underlined.
    pub fn is_underlined(&self) -> bool {
        self.underline > 0
    }

    /// Whether text at the current position is a key cap.
    pub fn is_key_cap(&self) -> bool {
        self.key > 0
    }

    fn adjust(&mut self, kind: StyleKind, delta: i32) {
        match kind {
            StyleKind::Bold => self.bold += delta,
            StyleKind::Underline => self.underline += delta,
            StyleKind::Fixed => self.fixed += delta,
            StyleKind::Key => self.key += delta,
            StyleKind::Big => self.size += delta,
            StyleKind::Small => self.size -= delta,
        }
    }
}

impl<S: RunSink> Visitor<Attribute> for StyleResolver<S> {
    fn text(&mut self, text: &str) -> bool {
        let font = self.font();
        let underlined = self.is_underlined();
        let key_cap = self.is_key_cap();
        let color = self.color();
        self.sink
            .handle_part(text, font, underlined, key_cap, color)
    }

    fn start_attribute(&mut self, attribute: &Attribute) -> bool {
        match attribute {
            Attribute::Style(kind) => {
                self.adjust(*kind, 1);
                true
            }
            Attribute::Color(color) => {
                self.colors.push(*color);
                true
            }
            other => self.sink.handle_other_attribute(other, true),
        }
    }

    fn end_attribute(&mut self, attribute: &Attribute) -> bool {
        match attribute {
            Attribute::Style(kind) => {
                self.adjust(*kind, -1);
                true
            }
            Attribute::Color(_) => {
                self.colors.pop();
                true
            }
            other => self.sink.handle_other_attribute(other, false),
        }
    }
}

/// Resolves `text` into runs reported to `sink`.
///
/// Returns whether the sink accepted every run.
pub fn resolve_text<S: RunSink>(text: &RichText, sink: &mut S) -> bool {
    let mut resolver = StyleResolver::new(sink);
    text.visit(&mut resolver)
}

impl<S: RunSink + ?Sized> RunSink for &mut S {
    fn handle_part(
        &mut self,
        text: &str,
        font: FontRequest,
        underlined: bool,
        key_cap: bool,
        color: Color,
    ) -> bool {
        (**self).handle_part(text, font, underlined, key_cap, color)
    }

    fn handle_other_attribute(&mut self, attribute: &Attribute, entering: bool) -> bool {
        (**self).handle_other_attribute(attribute, entering)
    }
}
