// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use super::{Token, TokenReader, render_keys};
use crate::{AlignMode, Attribute, Color, RichText, StyleKind};

/// Recursive-descent parser from a [`TokenReader`] to [`RichText`].
///
/// The parser borrows the reader for its own lifetime and always looks at one current token.
/// Whitespace state is kept across calls, so a space at the end of one tag's content and the
/// start of the next collapses into a single space. A space that is due when a tag starts is
/// placed in front of the tag, not inside it.
#[derive(Debug)]
pub struct Parser<'r, R: TokenReader + ?Sized> {
    reader: &'r mut R,
    current: Token,
    /// Whitespace was seen and a space goes in front of the next text.
    pending_space: bool,
    /// At the start, after a line break, or right after a space.
    suppress_space: bool,
}

impl<'r, R: TokenReader + ?Sized> Parser<'r, R> {
    /// Creates a parser and reads the first token.
    pub fn new(reader: &'r mut R) -> Self {
        let current = reader.read_next();
        Self {
            reader,
            current,
            pending_space: false,
            suppress_space: true,
        }
    }

    /// The token the parser is looking at.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Parses a whole document.
    ///
    /// In addition to what [`parse_text`](Self::parse_text) accepts, this recognizes `br` tags.
    /// A `br` produces a line break; the text inside it is kept but its attributes are dropped.
    /// Closing tags without a matching opening tag are ignored.
    pub fn parse(&mut self) -> RichText {
        let mut result = RichText::default();
        loop {
            match &mut self.current {
                Token::TagStart(name) if name.as_str() == "br" => {
                    self.read_next();
                    self.read_attributes();
                    self.pending_space = false;
                    self.suppress_space = true;
                    let content = self.parse_text(false);
                    self.finish_tag();
                    result.append_str("\n");
                    result.append_str(content.as_str());
                }
                Token::TagStart(_) => {
                    self.flush_space(&mut result);
                    let item = self.parse_tag(false);
                    result.append(&item);
                }
                Token::Text(text) => {
                    let text = mem::take(text);
                    self.append_text(&mut result, &text, false);
                    self.read_next();
                }
                Token::TagEnd(name) => {
                    log::debug!("ignoring unbalanced closing tag `{name}`");
                    self.read_next();
                }
                Token::Attribute { name, .. } => {
                    log::debug!("ignoring stray attribute `{name}`");
                    self.read_next();
                }
                Token::Eof => break,
                Token::Error => {
                    log::debug!("markup stream ended with an error");
                    break;
                }
            }
        }
        result
    }

    /// Parses text and nested tags up to the next closing tag or the end of input.
    ///
    /// With `keep_format`, text is copied verbatim. Otherwise every run of spaces, tabs and line
    /// breaks becomes one space, and leading or trailing whitespace is dropped.
    pub fn parse_text(&mut self, keep_format: bool) -> RichText {
        let mut result = RichText::default();
        loop {
            match &mut self.current {
                Token::Text(text) => {
                    let text = mem::take(text);
                    self.append_text(&mut result, &text, keep_format);
                    self.read_next();
                }
                Token::TagStart(_) => {
                    self.flush_space(&mut result);
                    let item = self.parse_tag(keep_format);
                    result.append(&item);
                }
                Token::Attribute { name, .. } => {
                    log::debug!("ignoring stray attribute `{name}`");
                    self.read_next();
                }
                Token::TagEnd(_) | Token::Eof | Token::Error => break,
            }
        }
        result
    }

    /// Skips the current tag including everything inside it.
    ///
    /// Does nothing unless the current token is an opening tag.
    pub fn skip_tag(&mut self) {
        if !matches!(self.current, Token::TagStart(_)) {
            return;
        }
        let mut level = 0_usize;
        loop {
            match self.current {
                Token::TagStart(_) => level += 1,
                Token::TagEnd(_) => {
                    level -= 1;
                    if level == 0 {
                        self.read_next();
                        return;
                    }
                }
                Token::Eof | Token::Error => return,
                Token::Attribute { .. } | Token::Text(_) => {}
            }
            self.read_next();
        }
    }

    fn parse_tag(&mut self, keep_format: bool) -> RichText {
        let name = match &mut self.current {
            Token::TagStart(name) if !name.is_empty() => mem::take(name),
            _ => {
                log::debug!("skipping malformed tag");
                self.skip_tag();
                return RichText::default();
            }
        };
        self.read_next();
        let attributes = self.read_attributes();
        let find = |key: &str| {
            attributes
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        };

        let result = match name.as_str() {
            "b" | "em" => self.styled(keep_format, StyleKind::Bold),
            "u" => self.styled(keep_format, StyleKind::Underline),
            "tt" => self.styled(keep_format, StyleKind::Fixed),
            "big" => self.styled(keep_format, StyleKind::Big),
            "small" => self.styled(keep_format, StyleKind::Small),
            "kbd" | "key" => {
                let content = self.parse_text(keep_format);
                render_keys(content.as_str())
            }
            "font" => {
                let color = find("color").map_or_else(Color::default, |name| {
                    Color::parse(name).unwrap_or_else(|| {
                        log::debug!("unknown color `{name}`, using default");
                        Color::default()
                    })
                });
                self.parse_text(keep_format)
                    .with_new_attribute(Attribute::Color(color))
            }
            "a" => {
                let href = find("href").map(String::from);
                let content = self.parse_text(keep_format);
                match href {
                    Some(target) => content.with_new_attribute(Attribute::Link(target)),
                    None => {
                        log::debug!("link without target");
                        content
                    }
                }
            }
            "align" => {
                let width = find("width")
                    .and_then(|value| value.trim().parse::<i32>().ok())
                    .unwrap_or(0)
                    .max(0);
                let mode = find("align")
                    .and_then(AlignMode::parse)
                    .unwrap_or_default();
                self.parse_text(keep_format)
                    .with_new_attribute(Attribute::Alignment { width, mode })
            }
            _ => {
                log::trace!("transparent tag `{name}`");
                self.parse_text(keep_format)
            }
        };
        self.finish_tag();
        result
    }

    fn styled(&mut self, keep_format: bool, kind: StyleKind) -> RichText {
        self.parse_text(keep_format)
            .with_new_attribute(Attribute::Style(kind))
    }

    fn read_attributes(&mut self) -> Vec<(String, String)> {
        let mut attributes = Vec::new();
        while let Token::Attribute { name, value } = &mut self.current {
            attributes.push((mem::take(name), mem::take(value)));
            self.read_next();
        }
        attributes
    }

    fn finish_tag(&mut self) {
        if matches!(self.current, Token::TagEnd(_)) {
            self.read_next();
        }
    }

    fn append_text(&mut self, result: &mut RichText, text: &str, keep_format: bool) {
        if keep_format {
            if !text.is_empty() {
                self.flush_space(result);
                result.append_str(text);
                self.suppress_space = false;
            }
            return;
        }
        let mut normalized = String::with_capacity(text.len());
        for ch in text.chars() {
            if matches!(ch, ' ' | '\r' | '\n' | '\t') {
                if !self.suppress_space {
                    self.pending_space = true;
                }
            } else {
                if mem::take(&mut self.pending_space) {
                    normalized.push(' ');
                }
                normalized.push(ch);
                self.suppress_space = false;
            }
        }
        result.append_str(&normalized);
    }

    fn flush_space(&mut self, result: &mut RichText) {
        if mem::take(&mut self.pending_space) {
            result.append_str(" ");
            self.suppress_space = true;
        }
    }

    fn read_next(&mut self) {
        if !self.current.is_end() {
            self.current = self.reader.read_next();
        }
    }
}
