// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_document::{BlockObject, Canvas, DrawFlags, Point, Rect, Size};
use styled_text::{Color, FontRequest};

/// One call made to a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DrawOp {
    Text {
        text: String,
        origin: Point,
        color: Color,
        underlined: bool,
    },
    KeyCap {
        text: String,
        area: Rect,
    },
}

/// A canvas that records what is drawn.
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub(crate) ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// The recorded text runs, in drawing order.
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .map(|op| match op {
                DrawOp::Text { text, .. } | DrawOp::KeyCap { text, .. } => text.as_str(),
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        _font: &FontRequest,
        color: Color,
        underlined: bool,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            color,
            underlined,
        });
    }

    fn draw_key_cap(&mut self, area: Rect, text: &str, _font: &FontRequest, _color: Color) {
        self.ops.push(DrawOp::KeyCap {
            text: text.to_string(),
            area,
        });
    }
}

/// A labelled rectangle standing in for images and widgets.
#[derive(Clone, Debug)]
pub(crate) struct TestBox {
    pub(crate) label: &'static str,
    pub(crate) size: Size,
}

impl TestBox {
    pub(crate) fn new(label: &'static str, width: i32, height: i32) -> Self {
        Self {
            label,
            size: Size::new(width, height),
        }
    }
}

impl BlockObject for TestBox {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&self, canvas: &mut dyn Canvas, area: Rect, _flags: DrawFlags) {
        // Recorded as a key cap, which keeps both the label and the area.
        canvas.draw_key_cap(area, self.label, &FontRequest::DEFAULT, Color::Static);
    }
}
