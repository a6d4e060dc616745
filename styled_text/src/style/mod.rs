// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text attribute vocabulary.
//!
//! This module defines the closed set of [`Attribute`]s a span can carry, the palette
//! [`Color`]s, and the [`FontRequest`] the resolver produces from style attributes.
//!
//! It is independent of any layout engine.

mod attribute;
mod color;
mod values;

pub use attribute::Attribute;
pub use color::Color;
pub use values::{AlignMode, FontRequest, StyleKind};
