// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for objects floating at the page sides.

use alloc::collections::VecDeque;
use core::ops::{Index, IndexMut};

use super::{Document, FLOAT_GAP};
use crate::{FontMetrics, Point, Rect, Side, Size};

/// Float state of one side.
#[derive(Clone, Debug, Default)]
pub(super) struct FloatState {
    /// Objects waiting for this side, as indices into the document's objects.
    pub(super) queue: VecDeque<usize>,
    /// Height still covered by the active object.
    remaining: i32,
    /// Width taken from the text by the active object, including the gap.
    width: i32,
}

impl FloatState {
    /// Returns `true` if no object occupies this side.
    pub(super) fn is_idle(&self) -> bool {
        self.remaining <= 0
    }

    pub(super) fn remaining(&self) -> i32 {
        self.remaining.max(0)
    }

    /// Width the text has to leave free at this side.
    pub(super) fn occupied_width(&self) -> i32 {
        if self.is_idle() { 0 } else { self.width }
    }

    /// Whether an object taking `width` may follow one that vacated `vacated` without a fresh
    /// line start.
    ///
    /// Only narrower or equal replacements qualify: the lines next to the old object were
    /// laid out for its width, and a wider one would overlap them.
    pub(super) fn may_promote(width: i32, vacated: i32) -> bool {
        width <= vacated
    }

    fn activate(&mut self, size: Size) {
        if size.height > 0 {
            self.remaining = size.height;
            self.width = size.width.max(0).saturating_add(FLOAT_GAP);
        } else {
            self.remaining = 0;
            self.width = 0;
        }
    }

    /// Moves down by `dy`. Returns the vacated width if the active object ended.
    fn advance(&mut self, dy: i32) -> Option<i32> {
        if self.is_idle() {
            return None;
        }
        self.remaining -= dy;
        if self.remaining > 0 {
            return None;
        }
        self.remaining = 0;
        Some(core::mem::take(&mut self.width))
    }
}

/// Float state of both sides.
#[derive(Clone, Debug, Default)]
pub(super) struct Floats([FloatState; 2]);

impl Floats {
    fn has_queued(&self) -> bool {
        self.0.iter().any(|state| !state.queue.is_empty())
    }
}

impl Index<Side> for Floats {
    type Output = FloatState;

    fn index(&self, side: Side) -> &FloatState {
        &self.0[side as usize]
    }
}

impl IndexMut<Side> for Floats {
    fn index_mut(&mut self, side: Side) -> &mut FloatState {
        &mut self.0[side as usize]
    }
}

impl<M: FontMetrics, O> Document<M, O> {
    /// Moves down by `dy`, ending and starting floats on the way.
    ///
    /// This is the only place float occupancy advances. The move is split at every point
    /// where a float ends. The next float queued at that side starts right there if it is not
    /// wider than the one that ended; otherwise it waits for the next line start.
    pub(super) fn add_y(&mut self, dy: i32) {
        let mut dy = dy;
        while dy > 0 {
            let step = Side::ALL
                .iter()
                .map(|&side| &self.floats[side])
                .filter(|state| !state.is_idle())
                .map(FloatState::remaining)
                .fold(dy, i32::min);
            self.y = self.y.saturating_add(step);
            dy -= step;
            for side in Side::ALL {
                let Some(vacated) = self.floats[side].advance(step) else {
                    continue;
                };
                let Some(&next) = self.floats[side].queue.front() else {
                    continue;
                };
                let width = self.objects.get(next).map_or(0, |block| {
                    block.size.width.max(0).saturating_add(FLOAT_GAP)
                });
                if FloatState::may_promote(width, vacated) {
                    log::trace!("{side:?} float {next} follows at y {}", self.y);
                    self.start_float(side);
                } else {
                    log::trace!("{side:?} float {next} needs {width}, only {vacated} vacated");
                }
            }
        }
    }

    /// Places the next object queued at `side` at the current y.
    pub(super) fn start_float(&mut self, side: Side) {
        let Some(index) = self.floats[side].queue.pop_front() else {
            return;
        };
        let Some(block) = self.objects.get_mut(index) else {
            return;
        };
        let size = block.size;
        let x = match side {
            Side::Left => self.left_margin,
            Side::Right => self
                .page_width
                .saturating_sub(self.right_margin)
                .saturating_sub(size.width),
        };
        block.area = Some(Rect::new(Point::new(x, self.y), size));
        self.floats[side].activate(size);
    }

    /// Starts the objects waiting at idle sides, if the current line is still empty.
    ///
    /// A fresh line has the full width between the margins, so an object that was too wide to
    /// follow its predecessor directly fits here. Resets the cursor to the line start.
    pub(super) fn start_waiting_floats(&mut self) {
        if self.line().is_empty() {
            for side in Side::ALL {
                let state = &self.floats[side];
                if state.is_idle() && !state.queue.is_empty() {
                    log::trace!("{side:?} float starts on a new line at y {}", self.y);
                    self.start_float(side);
                }
            }
        }
        self.x = self.line_start_x();
    }

    /// Places every waiting object and moves below all of them.
    pub(super) fn drain_floats(&mut self) {
        loop {
            for side in Side::ALL {
                if self.floats[side].is_idle() {
                    self.start_float(side);
                }
            }
            let remaining = Side::ALL
                .iter()
                .map(|&side| self.floats[side].remaining())
                .fold(0, i32::max);
            if remaining > 0 {
                self.add_y(remaining);
            } else if !self.floats.has_queued() {
                break;
            }
        }
        self.x = self.line_start_x();
    }
}
