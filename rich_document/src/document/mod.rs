// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document layout engine.

mod floats;
mod flow;
mod line_break;
mod navigation;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use smallvec::SmallVec;
use styled_text::{AlignMode, Color, FontRequest, RichText};

use self::floats::Floats;
use crate::{
    BlockItem, BlockObject, Canvas, DrawFlags, FontMetrics, Item, ItemKind, Placement, Point,
    Rect, Side,
};

/// Horizontal padding on each side of a key cap, in pixels.
pub const KEY_CAP_PADDING: i32 = 3;

/// Horizontal gap between a floating object and the text next to it, in pixels.
pub const FLOAT_GAP: i32 = 5;

/// Options for laying out a [`Document`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Separate paragraphs by a full line instead of half a line.
    pub full_lines_between_paragraphs: bool,
}

/// An open alignment box.
#[derive(Copy, Clone, Debug)]
struct AlignBox {
    start_x: i32,
    /// First item inside the box.
    first_item: usize,
    /// Line the box was opened on, as the index of that line's first item.
    line_start: usize,
    width: i32,
    mode: AlignMode,
}

/// A rich text document being laid out.
///
/// Text is added with [`add`](Self::add) and the other placement calls, which lay it out
/// immediately. Text is collected into a pending word until a word separator or a style change
/// that requires it, and pending words are committed to the current line as positioned
/// [`Item`]s. Call [`finish`](Self::finish) once all content has been added.
///
/// `M` measures text, `O` is the type of floating and centered objects.
#[derive(Clone, Debug)]
pub struct Document<M, O> {
    metrics: M,
    options: RenderOptions,
    page_width: i32,
    left_margin: i32,
    right_margin: i32,
    x: i32,
    y: i32,
    items: Vec<Item>,
    /// Index of the first item on the current line.
    line_start: usize,
    /// The pending word, not yet positioned.
    word: Vec<Item>,
    objects: Vec<BlockItem<O>>,
    floats: Floats,
    alignments: SmallVec<[AlignBox; 2]>,
    link_depth: usize,
}

impl<M, O> Document<M, O> {
    /// Creates an empty document measuring text with `metrics`.
    ///
    /// The page width starts at zero; set it with [`set_page_width`](Self::set_page_width)
    /// before adding content.
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            options: RenderOptions::default(),
            page_width: 0,
            left_margin: 0,
            right_margin: 0,
            x: 0,
            y: 0,
            items: Vec::new(),
            line_start: 0,
            word: Vec::new(),
            objects: Vec::new(),
            floats: Floats::default(),
            alignments: SmallVec::new(),
            link_depth: 0,
        }
    }

    /// The font metrics provider.
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// The current layout options.
    pub fn render_options(&self) -> RenderOptions {
        self.options
    }

    /// Sets the layout options for content added from now on.
    pub fn set_render_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// The page width.
    pub fn page_width(&self) -> i32 {
        self.page_width
    }

    /// Sets the page width for lines started from now on.
    pub fn set_page_width(&mut self, width: i32) {
        self.page_width = width;
    }

    /// The left margin.
    pub fn left_margin(&self) -> i32 {
        self.left_margin
    }

    /// The right margin.
    pub fn right_margin(&self) -> i32 {
        self.right_margin
    }

    /// Sets the right margin.
    pub fn set_right_margin(&mut self, margin: i32) {
        self.right_margin = margin;
    }

    /// The committed items.
    ///
    /// Items on the current line have their final x position but a provisional y position
    /// until the line is flushed.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All objects added so far, in the order they were added.
    pub fn objects(&self) -> &[BlockItem<O>] {
        &self.objects
    }

    /// The layout cursor.
    pub fn cursor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Removes all content and resets the cursor and the margins.
    ///
    /// The page width, the layout options and the metrics provider are kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.word.clear();
        self.objects.clear();
        self.floats = Floats::default();
        self.alignments.clear();
        self.link_depth = 0;
        self.line_start = 0;
        self.left_margin = 0;
        self.right_margin = 0;
        self.x = 0;
        self.y = 0;
    }

    /// Height of the laid out content.
    ///
    /// This covers every placed object. Call [`finish`](Self::finish) first to include the
    /// last line and objects still waiting for space.
    pub fn get_document_height(&self) -> i32 {
        self.objects
            .iter()
            .filter_map(BlockItem::area)
            .map(|area| area.bottom())
            .fold(self.y, i32::max)
    }

    /// Rightmost extent of all items and placed objects.
    pub fn get_document_width(&self) -> i32 {
        let items = self.items.iter().map(|item| item.pos.x.saturating_add(item.width));
        let objects = self
            .objects
            .iter()
            .filter_map(BlockItem::area)
            .map(|area| area.right());
        items.chain(objects).fold(0, i32::max)
    }
}

impl<M: FontMetrics, O> Document<M, O> {
    /// Sets the left margin.
    ///
    /// If nothing has been added to the current line yet, the line starts at the new margin.
    pub fn set_left_margin(&mut self, margin: i32) {
        let at_start = self.is_at_line_start();
        self.left_margin = margin;
        if at_start {
            self.x = self.line_start_x();
        }
    }

    /// Adds rich text, word wrapping it at spaces.
    ///
    /// Line breaks in the text start new lines.
    pub fn add(&mut self, text: &RichText) {
        self.add_flow(text, true);
    }

    /// Adds rich text that is never broken at spaces.
    ///
    /// Line breaks in the text still start new lines. Lines that do not fit overflow.
    pub fn add_preformatted(&mut self, text: &RichText) {
        self.add_flow(text, false);
    }

    /// Moves to `x` relative to the left margin, then adds `text`.
    pub fn add_at(&mut self, x: i32, text: &RichText) {
        self.tab_to(x);
        self.add(text);
    }

    /// Adds `text` so that it ends at `x` relative to the left margin.
    ///
    /// If the cursor is already past that point, the text starts at the cursor.
    pub fn add_right(&mut self, x: i32, text: &RichText) {
        self.flush_word();
        let width = self.measure(text);
        self.tab_to(x.saturating_sub(width));
        self.add(text);
    }

    /// Adds `text` centered on `x` relative to the left margin.
    pub fn add_centered(&mut self, x: i32, text: &RichText) {
        self.flush_word();
        let width = self.measure(text);
        self.tab_to(x.saturating_sub(width / 2));
        self.add(text);
    }

    /// Ends the pending word, so following text is not glued to it.
    pub fn add_word_separator(&mut self) {
        self.flush_word();
    }

    /// Starts a new line, even if the current line is empty.
    pub fn add_newline(&mut self) {
        self.flush_word();
        self.new_line();
    }

    /// Ends the current paragraph and adds vertical space.
    ///
    /// The space is half a line of the default font, or a full line with
    /// [`RenderOptions::full_lines_between_paragraphs`].
    pub fn add_paragraph(&mut self) {
        self.flush_line();
        let height = self.metrics.line_height(&FontRequest::DEFAULT);
        let gap = if self.options.full_lines_between_paragraphs {
            height
        } else {
            height / 2
        };
        self.add_y(gap);
        self.start_waiting_floats();
    }

    /// Moves the cursor to `x` relative to the left margin.
    ///
    /// The cursor never moves left.
    pub fn tab_to(&mut self, x: i32) {
        self.flush_word();
        let target = self.left_margin.saturating_add(x);
        if target > self.x {
            self.x = target;
        }
    }

    /// Completes the layout.
    ///
    /// Flushes the current line and places all floating objects still waiting for space, so
    /// that [`get_document_height`](Self::get_document_height) covers them.
    pub fn finish(&mut self) {
        self.flush_line();
        self.drain_floats();
    }
}

impl<M: FontMetrics, O: BlockObject> Document<M, O> {
    /// Adds an object floating at `side`.
    ///
    /// The object is placed right away if nothing floats at that side and the cursor is at
    /// the start of an empty line. Otherwise it waits for the first line that starts while the
    /// side is free.
    pub fn add_float_object(&mut self, object: O, side: Side) {
        let size = object.size();
        let index = self.objects.len();
        self.objects.push(BlockItem {
            placement: side.into(),
            size,
            area: None,
            object,
        });
        self.floats[side].queue.push_back(index);
        if self.floats[side].is_idle() && self.is_at_line_start() {
            self.start_float(side);
            self.x = self.line_start_x();
        } else {
            log::trace!("{side:?} float {index} waits for space");
        }
    }

    /// Adds an object centered between the current text edges, on lines of its own.
    pub fn add_center_object(&mut self, object: O) {
        self.flush_line();
        let size = object.size();
        let left = self.line_start_x();
        let right = self.right_edge();
        let x = left.saturating_add((right - left - size.width) / 2);
        self.objects.push(BlockItem {
            placement: Placement::Center,
            size,
            area: Some(Rect::new(Point::new(x, self.y), size)),
            object,
        });
        self.add_y(size.height);
        self.start_waiting_floats();
    }

    /// Draws the part of the document visible in `area`.
    ///
    /// `area` is in canvas coordinates. Document row `skip_y` is drawn at the top of `area`.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, area: Rect, skip_y: i32) {
        let dx = area.left();
        let dy = area.top().saturating_sub(skip_y);
        for item in &self.items {
            if item.is_marker() {
                continue;
            }
            let bounds = self.item_bounds(item).translate(dx, dy);
            if !bounds.intersects(&area) {
                continue;
            }
            let color = link_color(item.kind).unwrap_or(item.color);
            if item.key_cap {
                canvas.draw_key_cap(bounds, &item.text, &item.font, color);
            } else {
                canvas.draw_text(bounds.origin, &item.text, &item.font, color, item.underline);
            }
        }
        for block in &self.objects {
            let Some(placed) = block.area else {
                continue;
            };
            let placed = placed.translate(dx, dy);
            if placed.intersects(&area) {
                block.object.draw(canvas, placed, DrawFlags::default());
            }
        }
    }
}

fn link_color(kind: ItemKind) -> Option<Color> {
    match kind {
        ItemKind::Link => Some(Color::Link),
        ItemKind::LinkHover => Some(Color::LinkShade),
        ItemKind::LinkFocus => Some(Color::LinkFocus),
        ItemKind::Normal | ItemKind::LinkTarget => None,
    }
}
