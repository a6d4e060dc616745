// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_document::FontMetrics;
use styled_text::FontRequest;

/// Advance of every character in the default font.
pub(crate) const ADVANCE: i32 = 6;

/// Line height of the default font.
pub(crate) const LINE_HEIGHT: i32 = 16;

/// Fixed-advance metrics.
///
/// Every character advances by [`ADVANCE`], plus one pixel per bold step. Lines are
/// [`LINE_HEIGHT`] high, plus two pixels per size step.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FixedMetrics;

impl FontMetrics for FixedMetrics {
    fn line_height(&self, font: &FontRequest) -> i32 {
        LINE_HEIGHT + 2 * font.size
    }

    fn text_width(&self, font: &FontRequest, text: &str) -> i32 {
        (ADVANCE + font.weight.max(0)) * text.chars().count() as i32
    }
}

/// Width of `text` in the default font.
pub(crate) fn width_of(text: &str) -> i32 {
    FixedMetrics.text_width(&FontRequest::DEFAULT, text)
}
