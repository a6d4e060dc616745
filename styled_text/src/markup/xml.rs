// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! XML front end for the markup parser, backed by `quick-xml`.

use alloc::collections::VecDeque;
use alloc::string::String;

use quick_xml::Reader;
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, BytesText, Event};

use super::{Parser, Token, TokenReader};
use crate::RichText;

/// A [`TokenReader`] over an XML-like fragment.
///
/// The reader is lenient in the ways hand-written markup tends to need:
///
/// - any number of top-level elements and text nodes,
/// - unquoted attribute values (`width=100`) and attributes without a value,
/// - closing tags that do not match, or that close nothing,
/// - elements left open at the end of the input,
/// - HTML entity names such as `&nbsp;` besides the XML ones.
///
/// Comments, processing instructions and declarations are dropped. Text with an entity that
/// cannot be resolved is kept as written. Anything else the reader cannot make sense of, such
/// as a `<` that never gets its `>`, ends the stream with [`Token::Error`]. Tokens read before
/// that point are still delivered.
#[derive(Debug)]
pub struct XmlReader<'a> {
    reader: Reader<&'a [u8]>,
    pending: VecDeque<Token>,
    end: Option<Token>,
}

impl<'a> XmlReader<'a> {
    /// Creates a reader over `source`.
    pub fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        Self {
            reader,
            pending: VecDeque::new(),
            end: None,
        }
    }

    /// Returns `true` once the reader has given up on malformed input.
    pub fn has_error(&self) -> bool {
        self.end == Some(Token::Error)
    }

    /// Reads events until at least one token is pending or the input ends.
    fn fill(&mut self) {
        while self.pending.is_empty() && self.end.is_none() {
            match self.reader.read_event() {
                Ok(Event::Start(tag)) => self.push_tag(&tag),
                Ok(Event::Empty(tag)) => {
                    self.push_tag(&tag);
                    self.pending.push_back(Token::TagEnd(name_of(&tag)));
                }
                Ok(Event::End(tag)) => {
                    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                    self.pending.push_back(Token::TagEnd(name));
                }
                Ok(Event::Text(text)) => {
                    let text = unescape(&text);
                    if !text.is_empty() {
                        self.pending.push_back(Token::Text(text));
                    }
                }
                Ok(Event::CData(data)) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    self.pending.push_back(Token::Text(text));
                }
                Ok(Event::Eof) => self.end = Some(Token::Eof),
                Ok(_) => {}
                Err(err) => {
                    log::debug!(
                        "markup unreadable at byte {}: {err}",
                        self.reader.buffer_position()
                    );
                    self.end = Some(Token::Error);
                }
            }
        }
    }

    fn push_tag(&mut self, tag: &BytesStart<'_>) {
        self.pending.push_back(Token::TagStart(name_of(tag)));
        for attribute in tag.html_attributes() {
            match attribute {
                Ok(attribute) => {
                    let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
                    let value = match attribute.unescape_value() {
                        Ok(value) => value.into_owned(),
                        Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
                    };
                    self.pending.push_back(Token::Attribute { name, value });
                }
                Err(err) => log::debug!("skipping attribute: {err}"),
            }
        }
    }
}

impl TokenReader for XmlReader<'_> {
    fn read_next(&mut self) -> Token {
        self.fill();
        match self.pending.pop_front() {
            Some(token) => token,
            None => self.end.clone().unwrap_or(Token::Eof),
        }
    }
}

fn name_of(tag: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(tag.name().as_ref()).into_owned()
}

fn unescape(text: &BytesText<'_>) -> String {
    match text.unescape_with(resolve_html5_entity) {
        Ok(text) => text.into_owned(),
        Err(err) => {
            log::debug!("keeping text with unknown entity as written: {err}");
            String::from_utf8_lossy(text).into_owned()
        }
    }
}

/// Parses an XML-like markup fragment into rich text.
///
/// Malformed markup degrades instead of failing; see [`XmlReader`] for what is accepted.
///
/// ```
/// use styled_text::markup::parse_xml;
///
/// let text = parse_xml("<b>bold</b> and <font color=red>red</font>");
/// assert_eq!(text.as_str(), "bold and red");
/// assert_eq!(text.attributes_len(), 2);
/// ```
pub fn parse_xml(source: &str) -> RichText {
    let mut reader = XmlReader::new(source);
    Parser::new(&mut reader).parse()
}
