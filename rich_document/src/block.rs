// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Rect, Size};

/// A side of the page that objects can float at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    /// Left margin.
    Left,
    /// Right margin.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// Where a [`BlockItem`] is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Placement {
    /// Floated at the left margin, text flows around it on the right.
    Left,
    /// Floated at the right margin, text flows around it on the left.
    Right,
    /// Centered between the margins on lines of its own.
    Center,
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

/// An external object added to a document.
#[derive(Clone, Debug)]
pub struct BlockItem<O> {
    pub(crate) placement: Placement,
    pub(crate) size: Size,
    pub(crate) area: Option<Rect>,
    pub(crate) object: O,
}

impl<O> BlockItem<O> {
    /// How the object is placed.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The size reported by the object when it was added.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Where the object was placed, in document coordinates.
    ///
    /// Floats that are still waiting for margin space have no area yet.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// The object.
    pub fn object(&self) -> &O {
        &self.object
    }
}
