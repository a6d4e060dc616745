// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use styled_text::{Color, FontRequest};

use crate::{Point, Rect};

/// How an [`Item`] takes part in links.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ItemKind {
    /// Plain text.
    #[default]
    Normal,
    /// Zero-width marker in front of a link's text. Its [`Item::text`] is the link target.
    LinkTarget,
    /// Part of a link.
    Link,
    /// Part of a link under the mouse.
    LinkHover,
    /// Part of a link with keyboard focus.
    LinkFocus,
}

impl ItemKind {
    /// Returns `true` for the kinds used by link text.
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Link | Self::LinkHover | Self::LinkFocus)
    }
}

/// One positioned run of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    /// Role of the item in links.
    pub kind: ItemKind,
    /// Top left corner in document coordinates.
    pub pos: Point,
    /// Advance width, including key cap padding.
    pub width: i32,
    /// Font of the text.
    pub font: FontRequest,
    /// Color of the text, before link coloring.
    pub color: Color,
    /// Whether the text is underlined.
    pub underline: bool,
    /// Whether the text is drawn as a key cap.
    pub key_cap: bool,
    /// The text, or the link target for a [`ItemKind::LinkTarget`] marker.
    pub text: String,
    /// Whether the text may be broken at its spaces.
    pub breakable: bool,
}

impl Item {
    /// Returns `true` if this is a link marker.
    pub fn is_marker(&self) -> bool {
        self.kind == ItemKind::LinkTarget
    }

    /// Returns `true` if this item is link text.
    pub fn is_link(&self) -> bool {
        self.kind.is_link()
    }

    /// The area covered by the item, given the height of its font.
    pub fn bounds(&self, height: i32) -> Rect {
        Rect::from_xywh(self.pos.x, self.pos.y, self.width, height)
    }
}

/// Identifies a link in a document.
///
/// This is the index of the link's marker item. It is only meaningful for the document that
/// produced it, and only until that document is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub(crate) usize);

impl LinkId {
    /// Index of the marker in [`Document::items`](crate::Document::items).
    pub fn index(self) -> usize {
        self.0
    }
}
