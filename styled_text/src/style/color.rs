// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Colors of the user interface palette.
///
/// Text never carries literal RGB values. It names a palette slot, and the canvas decides what
/// that slot looks like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Regular text.
    #[default]
    Static = 0,
    /// Green text.
    Green = 1,
    /// Yellow text.
    Yellow = 2,
    /// Red text.
    Red = 3,
    /// White text.
    White = 4,
    /// Blue text.
    Blue = 5,
    /// High-contrast text.
    Contrast = 6,
    /// Text in input fields.
    Input = 7,
    /// Dimmed text.
    Faded = 8,
    /// Headings.
    Heading = 9,
    /// Selected text.
    Selection = 10,
    /// A link.
    Link = 11,
    /// A link under the mouse.
    LinkShade = 12,
    /// A link with keyboard focus.
    LinkFocus = 13,
    /// The background color.
    Background = 14,
    /// Black text.
    Black = 15,
}

impl Color {
    /// Parses a palette color from its markup name.
    ///
    /// Names are matched case-insensitively; `dim` is accepted as an alias for `faded`.
    ///
    /// ```
    /// use styled_text::Color;
    ///
    /// assert_eq!(Color::parse("Green"), Some(Color::Green));
    /// assert_eq!(Color::parse("dim"), Some(Color::Faded));
    /// assert_eq!(Color::parse("chartreuse"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("dim").then_some(Self::Faded))
    }

    /// Returns the markup name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Contrast => "contrast",
            Self::Input => "input",
            Self::Faded => "faded",
            Self::Heading => "heading",
            Self::Selection => "selection",
            Self::Link => "link",
            Self::LinkShade => "linkshade",
            Self::LinkFocus => "linkfocus",
            Self::Background => "background",
            Self::Black => "black",
        }
    }

    /// Returns a slice containing all colors.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Static,
            Self::Green,
            Self::Yellow,
            Self::Red,
            Self::White,
            Self::Blue,
            Self::Contrast,
            Self::Input,
            Self::Faded,
            Self::Heading,
            Self::Selection,
            Self::Link,
            Self::LinkShade,
            Self::LinkFocus,
            Self::Background,
            Self::Black,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
