// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of rich text documents.
//!
//! A [`Document`] takes [`RichText`](styled_text::RichText) and external objects and lays them
//! out on a page of fixed width:
//!
//! - text is word wrapped at spaces, with key caps and preformatted text kept whole,
//! - objects float at the left or right margin while text flows around them, or sit centered
//!   between paragraphs,
//! - link text can be hit tested and navigated with the keyboard,
//! - alignment attributes right align or center text within fixed-width boxes.
//!
//! Text is measured through [`FontMetrics`] and drawn through [`Canvas`]; the document does
//! neither itself.
//!
//! ## Example
//!
//! ```
//! use rich_document::{BlockObject, Canvas, Document, DrawFlags, FontMetrics, Rect, Size};
//! use styled_text::FontRequest;
//! use styled_text::markup::parse_xml;
//!
//! struct Mono;
//!
//! impl FontMetrics for Mono {
//!     fn line_height(&self, _: &FontRequest) -> i32 {
//!         16
//!     }
//!     fn text_width(&self, _: &FontRequest, text: &str) -> i32 {
//!         8 * text.chars().count() as i32
//!     }
//! }
//!
//! struct NoObject;
//!
//! impl BlockObject for NoObject {
//!     fn size(&self) -> Size {
//!         Size::default()
//!     }
//!     fn draw(&self, _: &mut dyn Canvas, _: Rect, _: DrawFlags) {}
//! }
//!
//! let mut doc = Document::<_, NoObject>::new(Mono);
//! doc.set_page_width(80);
//! doc.add(&parse_xml("Some <b>rich</b> text with <a href='next'>a link</a>."));
//! doc.finish();
//!
//! assert_eq!(doc.get_document_height(), 48);
//! let link = doc.get_next_link(None).unwrap();
//! assert_eq!(doc.get_link_target(link), Some("next"));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod block;
mod document;
mod geometry;
mod item;
mod metrics;
mod object;

pub use block::{BlockItem, Placement, Side};
pub use document::{Document, FLOAT_GAP, KEY_CAP_PADDING, RenderOptions};
pub use geometry::{Point, Rect, Size};
pub use item::{Item, ItemKind, LinkId};
pub use metrics::FontMetrics;
pub use object::{BlockObject, Canvas, DrawFlags};
