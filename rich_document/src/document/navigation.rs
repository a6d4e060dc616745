// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing and keyboard navigation of links.
//!
//! Every link starts with a zero-width [`ItemKind::LinkTarget`] marker holding the target,
//! followed by the link's text items. A [`LinkId`] is the index of the marker.

use super::Document;
use crate::{FontMetrics, Item, ItemKind, LinkId, Point, Rect};

impl<M: FontMetrics, O> Document<M, O> {
    /// The area covered by `item`.
    pub(super) fn item_bounds(&self, item: &Item) -> Rect {
        item.bounds(self.metrics.line_height(&item.font))
    }

    fn marker(&self, link: LinkId) -> Option<&Item> {
        self.items.get(link.0).filter(|item| item.is_marker())
    }

    /// The text items of `link`.
    fn link_items(&self, link: LinkId) -> impl Iterator<Item = &Item> {
        let start = if self.marker(link).is_some() {
            link.0 + 1
        } else {
            self.items.len()
        };
        self.items[start..].iter().take_while(|item| item.is_link())
    }

    /// The link under `pos`, if any.
    pub fn get_link_from_pos(&self, pos: Point) -> Option<LinkId> {
        let hit = self
            .items
            .iter()
            .position(|item| item.is_link() && self.item_bounds(item).contains(pos))?;
        self.items[..hit].iter().rposition(Item::is_marker).map(LinkId)
    }

    /// The target of `link`.
    pub fn get_link_target(&self, link: LinkId) -> Option<&str> {
        self.marker(link).map(|marker| marker.text.as_str())
    }

    /// Changes how the text of `link` is drawn.
    ///
    /// Only link kinds are accepted; other kinds would detach the text from its marker.
    pub fn set_link_kind(&mut self, link: LinkId, kind: ItemKind) {
        if !kind.is_link() || self.marker(link).is_none() {
            log::debug!("ignoring link kind {kind:?} for {link:?}");
            return;
        }
        for item in self.items[link.0 + 1..]
            .iter_mut()
            .take_while(|item| item.is_link())
        {
            item.kind = kind;
        }
    }

    /// Returns `true` if some text of `link` intersects `area`.
    pub fn is_link_visible(&self, link: LinkId, area: Rect) -> bool {
        self.link_items(link)
            .any(|item| self.item_bounds(item).intersects(&area))
    }

    /// The first link after `link`, or the first link if `link` is `None`.
    pub fn get_next_link(&self, link: Option<LinkId>) -> Option<LinkId> {
        let start = link.map_or(0, |link| link.0.saturating_add(1));
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, item)| item.is_marker())
            .map(|(index, _)| LinkId(index))
    }

    /// The last link before `link`, or the last link if `link` is `None`.
    pub fn get_previous_link(&self, link: Option<LinkId>) -> Option<LinkId> {
        let end = link.map_or(self.items.len(), |link| link.0.min(self.items.len()));
        self.items[..end].iter().rposition(Item::is_marker).map(LinkId)
    }

    /// Like [`get_next_link`](Self::get_next_link), but skips links not visible in `area`.
    pub fn get_next_link_in(&self, link: Option<LinkId>, area: Rect) -> Option<LinkId> {
        let mut link = link;
        while let Some(next) = self.get_next_link(link) {
            if self.is_link_visible(next, area) {
                return Some(next);
            }
            link = Some(next);
        }
        None
    }

    /// Like [`get_previous_link`](Self::get_previous_link), but skips links not visible in
    /// `area`.
    pub fn get_previous_link_in(&self, link: Option<LinkId>, area: Rect) -> Option<LinkId> {
        let mut link = link;
        while let Some(previous) = self.get_previous_link(link) {
            if self.is_link_visible(previous, area) {
                return Some(previous);
            }
            link = Some(previous);
        }
        None
    }
}
