// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_text::{Color, FontRequest};

use crate::{Point, Rect, Size};

/// The drawing target for a document.
///
/// Coordinates are canvas pixels; the document has already applied its scroll offset.
pub trait Canvas {
    /// Draws a run of text with its top left corner at `origin`.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &FontRequest,
        color: Color,
        underlined: bool,
    );

    /// Draws `text` as a key cap filling `area`.
    ///
    /// `area` includes the key cap padding on both sides.
    fn draw_key_cap(&mut self, area: Rect, text: &str, font: &FontRequest, color: Color);
}

/// State flags passed to [`BlockObject::draw`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DrawFlags {
    /// The object has keyboard focus.
    pub focused: bool,
    /// The object is disabled.
    pub disabled: bool,
}

/// An external object placed in a document, such as an image or a button.
///
/// Objects are either floated at a side of the text or centered on a line of their own.
pub trait BlockObject {
    /// The size the object occupies.
    ///
    /// Queried once, when the object is added.
    fn size(&self) -> Size;

    /// Draws the object into `area`, which has the size reported by [`size`](Self::size).
    fn draw(&self, canvas: &mut dyn Canvas, area: Rect, flags: DrawFlags);
}
