// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word wrapping of the pending word into lines.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use styled_text::FontRequest;

use super::Document;
use crate::{FontMetrics, Item, Point, Side};

/// Item carries visible text.
fn has_content(item: &Item) -> bool {
    !item.is_marker() && !item.text.is_empty()
}

/// First space that is not at the very start of `text`.
fn first_space(text: &str) -> Option<usize> {
    text.char_indices()
        .skip(1)
        .find(|&(_, ch)| ch == ' ')
        .map(|(index, _)| index)
}

impl<M: FontMetrics, O> Document<M, O> {
    /// Where lines start: the left margin plus the space taken by a left float.
    pub(super) fn line_start_x(&self) -> i32 {
        self.left_margin
            .saturating_add(self.floats[Side::Left].occupied_width())
    }

    /// Where lines end: the page width minus the right margin and a right float.
    pub(super) fn right_edge(&self) -> i32 {
        self.page_width
            .saturating_sub(self.right_margin)
            .saturating_sub(self.floats[Side::Right].occupied_width())
    }

    /// Items committed to the current line.
    pub(super) fn line(&self) -> &[Item] {
        self.items.get(self.line_start..).unwrap_or(&[])
    }

    /// The cursor is where a line starts and nothing is on the line or pending.
    pub(super) fn is_at_line_start(&self) -> bool {
        self.line().is_empty() && self.word.is_empty() && self.x == self.line_start_x()
    }

    /// Commits as much of the pending word to the current line as fits, wrapping as needed.
    ///
    /// Whatever remains pending afterwards fits on the current line.
    pub(super) fn process(&mut self) {
        let mut index = 0;
        let mut used = 0_i32;
        while let Some(chunk) = self.word.get(index) {
            let available = self.right_edge().saturating_sub(self.x);
            let width = used.saturating_add(chunk.width);
            if width <= available {
                used = width;
                index += 1;
                continue;
            }
            let forced = if chunk.breakable {
                first_space(&chunk.text)
            } else {
                None
            };
            let line_empty = !self.line().iter().any(has_content);
            if let Some((at, split)) = self.find_break(index, available, line_empty) {
                self.commit_split(at, split);
                self.wrap();
            } else if !line_empty {
                // Starting a new line may make the word fit.
                self.wrap();
            } else if self.trim_word_start() {
                // Retry without the leading spaces.
            } else if let Some(split) = forced {
                self.commit_split(index, split);
                self.wrap();
            } else {
                log::trace!("word of width {width} overflows line of width {available}");
                self.commit(index + 1);
            }
            index = 0;
            used = 0;
        }
    }

    /// Finds the last space in the pending word at which breaking keeps the part before the
    /// space within `available`.
    ///
    /// Only chunks up to and including `index` are considered. Returns the chunk index and
    /// the byte offset of the space in that chunk.
    fn find_break(&self, index: usize, available: i32, line_empty: bool) -> Option<(usize, usize)> {
        let mut before: i32 = self.word.iter().take(index).map(|chunk| chunk.width).sum();
        for at in (0..=index).rev() {
            let chunk = self.word.get(at)?;
            if at < index {
                before -= chunk.width;
            }
            if !chunk.breakable {
                continue;
            }
            for (split, _) in chunk.text.rmatch_indices(' ') {
                // A break must leave something on an empty line.
                if line_empty && split == 0 && !self.word.iter().take(at).any(has_content) {
                    continue;
                }
                let prefix = self.metrics.text_width(&chunk.font, &chunk.text[..split]);
                if before.saturating_add(prefix) <= available {
                    return Some((at, split));
                }
            }
        }
        None
    }

    /// Commits the pending word up to the space at byte `split` of chunk `at`.
    ///
    /// The spaces at the split are dropped.
    fn commit_split(&mut self, at: usize, split: usize) {
        let mut rest = self.word.split_off(at.min(self.word.len()));
        if let Some(chunk) = rest.first_mut() {
            let tail = chunk.text.split_off(split.min(chunk.text.len()));
            let mut head = chunk.clone();
            head.width = self.metrics.text_width(&head.font, &head.text);
            chunk.text = String::from(tail.trim_start_matches(' '));
            chunk.width = self.metrics.text_width(&chunk.font, &chunk.text);
            if !head.text.is_empty() {
                self.word.push(head);
            }
            if chunk.text.is_empty() {
                rest.remove(0);
            }
        }
        let head = mem::replace(&mut self.word, rest);
        self.place_all(head);
    }

    /// Starts a new line for the rest of the pending word.
    fn wrap(&mut self) {
        self.new_line();
        self.trim_word_start();
    }

    /// Drops the spaces at the start of the pending word.
    ///
    /// Stops at the first unbreakable chunk. Returns `true` if anything was dropped.
    fn trim_word_start(&mut self) -> bool {
        let mut trimmed = false;
        let mut index = 0;
        while let Some(chunk) = self.word.get_mut(index) {
            if chunk.is_marker() {
                index += 1;
                continue;
            }
            if !chunk.breakable {
                break;
            }
            let kept = chunk.text.trim_start_matches(' ');
            if kept.len() == chunk.text.len() {
                break;
            }
            trimmed = true;
            if kept.is_empty() {
                self.word.remove(index);
                continue;
            }
            chunk.text = String::from(kept);
            chunk.width = self.metrics.text_width(&chunk.font, &chunk.text);
            break;
        }
        trimmed
    }

    /// Commits the first `count` pending chunks.
    fn commit(&mut self, count: usize) {
        let rest = self.word.split_off(count.min(self.word.len()));
        let head = mem::replace(&mut self.word, rest);
        self.place_all(head);
    }

    fn place_all(&mut self, chunks: Vec<Item>) {
        for mut item in chunks {
            item.pos = Point::new(self.x, self.y);
            self.x = self.x.saturating_add(item.width);
            self.items.push(item);
        }
    }

    /// Commits the whole pending word, wrapping as needed.
    pub(super) fn flush_word(&mut self) {
        self.process();
        self.commit(self.word.len());
    }

    /// Commits the pending word and ends the current line, unless it is empty.
    pub(super) fn flush_line(&mut self) {
        self.flush_word();
        if !self.line().is_empty() {
            self.new_line();
        }
    }

    /// Ends the current line and moves below it. The pending word is not touched.
    ///
    /// The line is as high as its highest font, or the default font if it has no text. Text
    /// is placed using a fixed approximation of the baseline; link markers sit at the top.
    /// Floats waiting at an idle side start on the new line.
    pub(super) fn new_line(&mut self) {
        let height = self
            .line()
            .iter()
            .filter(|item| !item.is_marker())
            .map(|item| self.metrics.line_height(&item.font))
            .max()
            .unwrap_or_else(|| self.metrics.line_height(&FontRequest::DEFAULT));
        let top = self.y;
        let start = self.line_start.min(self.items.len());
        for item in &mut self.items[start..] {
            if item.is_marker() {
                item.pos.y = top;
            } else {
                let font_height = self.metrics.line_height(&item.font);
                item.pos.y = top + height - font_height - 4 + font_height / 4;
            }
        }
        self.line_start = self.items.len();
        self.add_y(height);
        self.start_waiting_floats();
    }
}
