// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_text::FontRequest;

/// Measures text for layout.
///
/// The document never rasterizes anything itself; all sizes come from this provider.
/// Implementations should return non-negative values, but negative ones are tolerated and
/// simply produce odd layouts.
pub trait FontMetrics {
    /// The height of one line of text in `font`.
    fn line_height(&self, font: &FontRequest) -> i32;

    /// The advance width of `text` in `font`.
    fn text_width(&self, font: &FontRequest, text: &str) -> i32;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn line_height(&self, font: &FontRequest) -> i32 {
        (**self).line_height(font)
    }

    fn text_width(&self, font: &FontRequest, text: &str) -> i32 {
        (**self).text_width(font, text)
    }
}
