// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod canvas;
mod metrics;
pub(crate) mod samples;

pub(crate) use canvas::{DrawOp, RecordingCanvas, TestBox};
pub(crate) use metrics::{ADVANCE, FixedMetrics, LINE_HEIGHT, width_of};

use rich_document::Document;
use styled_text::RichText;

pub(crate) type TestDocument = Document<FixedMetrics, TestBox>;

/// An empty document with the given page width.
pub(crate) fn document(page_width: i32) -> TestDocument {
    let mut doc = Document::new(FixedMetrics);
    doc.set_page_width(page_width);
    doc
}

/// Plain text without attributes.
pub(crate) fn plain(text: &str) -> RichText {
    RichText::new(text)
}

/// The text of every line, joining the items that share a top edge.
///
/// Only meaningful when all text uses the default font.
pub(crate) fn line_texts(doc: &TestDocument) -> Vec<String> {
    let mut lines: Vec<(i32, String)> = Vec::new();
    for item in doc.items().iter().filter(|item| !item.is_marker()) {
        match lines.last_mut() {
            Some((y, text)) if *y == item.pos.y => text.push_str(&item.text),
            _ => lines.push((item.pos.y, item.text.clone())),
        }
    }
    lines.into_iter().map(|(_, text)| text).collect()
}
