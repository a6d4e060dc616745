// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A text style that can be switched on for a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Bold text.
    ///
    /// `<em>` maps here as well; there is no italic font.
    Bold,
    /// Underlined text.
    Underline,
    /// Fixed-pitch text.
    Fixed,
    /// A key cap, as in keyboard shortcuts.
    Key,
    /// One size step larger.
    Big,
    /// One size step smaller.
    Small,
}

/// Horizontal placement of content inside an alignment box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignMode {
    /// Padding goes to the right.
    #[default]
    Left,
    /// Padding is split evenly.
    Center,
    /// Padding goes to the left.
    Right,
}

impl AlignMode {
    /// Parses an alignment keyword (`left`, `center`, `right`).
    ///
    /// Unknown keywords yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("left") {
            Some(Self::Left)
        } else if s.eq_ignore_ascii_case("center") {
            Some(Self::Center)
        } else if s.eq_ignore_ascii_case("right") {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// A resolved font selector.
///
/// All fields are relative to the default font: `size` counts size steps (negative for
/// smaller), `weight` counts bold steps. Font metrics providers map this to an actual font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontRequest {
    /// Size steps relative to the default font.
    pub size: i32,
    /// Weight steps relative to the default font.
    pub weight: i32,
    /// Whether a fixed-pitch font is requested.
    pub fixed: bool,
}

impl FontRequest {
    /// The default font.
    pub const DEFAULT: Self = Self {
        size: 0,
        weight: 0,
        fixed: false,
    };

    /// Returns a copy with `size` added to the size steps.
    #[must_use]
    pub const fn add_size(self, size: i32) -> Self {
        Self {
            size: self.size + size,
            ..self
        }
    }

    /// Returns a copy with `weight` added to the weight steps.
    #[must_use]
    pub const fn add_weight(self, weight: i32) -> Self {
        Self {
            weight: self.weight + weight,
            ..self
        }
    }

    /// Returns a copy with the fixed-pitch flag set to `fixed`.
    #[must_use]
    pub const fn with_fixed(self, fixed: bool) -> Self {
        Self { fixed, ..self }
    }
}
