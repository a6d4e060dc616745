// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute→run resolution for [`RichText`](crate::RichText).
//!
//! [`AttributedText::visit`](attributed_text::AttributedText::visit) reports nested span
//! events. This module turns them into flat runs:
//! - Style and color attributes are folded into counters and a color stack, and every text
//!   chunk is reported with its resolved [`FontRequest`](crate::FontRequest), flags, and color.
//! - All other attributes (links, alignment boxes) are passed on unresolved, so the consumer
//!   can attach its own side effects.
//!
//! It is `no_std` + `alloc` friendly.

mod resolver;


pub use resolver::{RunSink, StyleResolver, resolve_text};
