// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use super::{AlignMode, Color, StyleKind};

/// An attribute attached to a span of rich text.
///
/// The set is closed. Style and color attributes are resolved into fonts and colors by
/// [`StyleResolver`](crate::resolve::StyleResolver); links and alignment boxes are handed on to
/// the layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Switches on a text style.
    Style(StyleKind),
    /// Sets the text color.
    Color(Color),
    /// Makes the text a link to the given target.
    Link(String),
    /// Lays the text out in a box of fixed width.
    Alignment {
        /// Box width in pixels.
        width: i32,
        /// Where the content goes inside the box.
        mode: AlignMode,
    },
}

impl Attribute {
    /// Shorthand for a link attribute.
    pub fn link(target: &str) -> Self {
        Self::Link(String::from(target))
    }

    /// Returns `true` for attributes the style resolver consumes itself.
    pub fn is_style(&self) -> bool {
        matches!(self, Self::Style(_) | Self::Color(_))
    }
}

impl From<StyleKind> for Attribute {
    fn from(kind: StyleKind) -> Self {
        Self::Style(kind)
    }
}

impl From<Color> for Attribute {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}
