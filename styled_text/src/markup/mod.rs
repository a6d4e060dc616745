// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline markup → [`RichText`](crate::RichText).
//!
//! The markup is a small XML-like grammar:
//!
//! | Tag                                  | Effect                                   |
//! |--------------------------------------|------------------------------------------|
//! | `b`, `em`                            | [`StyleKind::Bold`](crate::StyleKind)    |
//! | `u`                                  | underline                                |
//! | `tt`                                 | fixed pitch                              |
//! | `big`, `small`                       | one size step up/down                    |
//! | `kbd`, `key`                         | key combination, see [`render_keys`]     |
//! | `font color=NAME`                    | palette [`Color`](crate::Color)          |
//! | `a href=URL`                         | link                                     |
//! | `align width=N align=left/center/right` | fixed-width alignment box             |
//! | `br` (top level only)                | line break                               |
//!
//! There is no italic font, so `em` is bold. Tags not in the table are transparent: their content
//! is parsed normally but they add no attribute.
//!
//! Nothing in the markup is an error. Unknown color names, missing or invalid attribute values and
//! stray tokens all degrade to defaults.
//!
//! [`Parser`] works on any [`TokenReader`]. With the `std` feature, [`parse_xml`] feeds it from
//! `XmlReader`, which accepts loose XML such as unquoted attribute values and unclosed tags.

mod keys;
mod parser;
#[cfg(feature = "std")]
mod xml;


use alloc::string::String;

pub use keys::{KEY_HYPHEN, render_keys};
pub use parser::Parser;
#[cfg(feature = "std")]
pub use xml::{XmlReader, parse_xml};

/// One token of a markup stream.
///
/// Entity references in names, values and text are expected to be expanded already.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An opening tag with its name.
    TagStart(String),
    /// A closing tag with its name.
    TagEnd(String),
    /// An attribute of the most recent opening tag.
    Attribute {
        /// Attribute name.
        name: String,
        /// Attribute value.
        value: String,
    },
    /// Character data.
    Text(String),
    /// End of input.
    Eof,
    /// The input could not be tokenized any further.
    Error,
}

impl Token {
    /// Returns `true` for [`Token::Eof`] and [`Token::Error`].
    pub fn is_end(&self) -> bool {
        matches!(self, Self::Eof | Self::Error)
    }
}

/// A pull cursor over markup tokens.
///
/// After returning [`Token::Eof`] or [`Token::Error`], a reader should keep returning the same.
pub trait TokenReader {
    /// Advances to the next token.
    fn read_next(&mut self) -> Token;
}

impl<R: TokenReader + ?Sized> TokenReader for &mut R {
    fn read_next(&mut self) -> Token {
        (**self).read_next()
    }
}
