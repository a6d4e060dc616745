// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text styling built on [`attributed_text`].
//!
//! - [`style`] defines the closed attribute vocabulary: [`Attribute`], [`StyleKind`],
//!   palette [`Color`]s, [`AlignMode`], and the resolved [`FontRequest`].
//! - [`markup`] parses a small XML-like markup into [`RichText`].
//! - [`resolve`] flattens the nested spans of a [`RichText`] into styled runs.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text.
//!
//! ## Example
//!
//! ```
//! use styled_text::markup::parse_xml;
//! use styled_text::resolve::{RunSink, resolve_text};
//! use styled_text::{Attribute, Color, FontRequest};
//!
//! #[derive(Default)]
//! struct Runs(Vec<(String, i32)>);
//!
//! impl RunSink for Runs {
//!     fn handle_part(&mut self, text: &str, font: FontRequest, _: bool, _: bool, _: Color) -> bool {
//!         self.0.push((text.to_string(), font.weight));
//!         true
//!     }
//!     fn handle_other_attribute(&mut self, _: &Attribute, _: bool) -> bool {
//!         true
//!     }
//! }
//!
//! let text = parse_xml("Hello <b>world</b>!");
//! let mut runs = Runs::default();
//! resolve_text(&text, &mut runs);
//! assert_eq!(
//!     runs.0,
//!     [("Hello ".to_string(), 0), ("world".to_string(), 1), ("!".to_string(), 0)]
//! );
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

pub mod markup;
pub mod resolve;
pub mod style;

pub use attributed_text::{AttributedText, Span, Visitor};

pub use resolve::{RunSink, StyleResolver};
pub use style::{AlignMode, Attribute, Color, FontRequest, StyleKind};

/// Text carrying rich text [`Attribute`]s.
pub type RichText = AttributedText<Attribute>;
