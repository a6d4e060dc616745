// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a Rust crate for text carrying attributes on byte ranges.
//!
//! An [`AttributedText`] owns a `String` and a list of [`Span`]s. Spans are never placed on
//! arbitrary ranges: an attribute wraps the whole buffer at the time it is added, and texts are
//! combined with [`append`](AttributedText::append), [`substr`](AttributedText::substr) and
//! [`erase`](AttributedText::erase). As a result spans are always disjoint or nested, which
//! lets [`AttributedText::visit`] report them as a properly nested sequence of events.
//!
//! ```
//! use attributed_text::{AttributedText, Visitor};
//!
//! let mut text = AttributedText::new("Hello, ");
//! text.append(&AttributedText::new("world").with_new_attribute("bold"));
//! assert_eq!(text.as_str(), "Hello, world");
//!
//! struct Bold(usize);
//! impl Visitor<&'static str> for Bold {
//!     fn text(&mut self, _: &str) -> bool { true }
//!     fn start_attribute(&mut self, _: &&'static str) -> bool { self.0 += 1; true }
//!     fn end_attribute(&mut self, _: &&'static str) -> bool { true }
//! }
//! let mut bold = Bold(0);
//! assert!(text.visit(&mut bold));
//! assert_eq!(bold.0, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attributed_text;
mod span;
mod visit;

pub use crate::attributed_text::AttributedText;
pub use crate::span::Span;
pub use crate::visit::Visitor;
