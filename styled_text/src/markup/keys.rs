// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Attribute, RichText, StyleKind};

/// The glyph shown for a `-` joining two keys, as in `Alt–X`.
pub const KEY_HYPHEN: &str = "\u{2013}";

const KEY_DELIMITERS: [char; 8] = ['-', '+', '/', ',', '.', ';', ':', ' '];

fn is_delimiter(ch: char) -> bool {
    KEY_DELIMITERS.contains(&ch)
}

/// Splits a key combination into key caps.
///
/// Every run of text between delimiters (`- + / , . ; :` and space) becomes one
/// [`StyleKind::Key`] span. Delimiters stay plain text, except for a single `-` with a key on
/// both sides, which is replaced by [`KEY_HYPHEN`].
///
/// ```
/// use styled_text::markup::{KEY_HYPHEN, render_keys};
///
/// let keys = render_keys("Alt-X");
/// assert_eq!(keys.as_str(), format!("Alt{KEY_HYPHEN}X"));
/// assert_eq!(keys.attributes_len(), 2);
/// ```
pub fn render_keys(text: &str) -> RichText {
    let mut result = RichText::default();
    let key = Attribute::Style(StyleKind::Key);
    let mut rest = text;
    while let Some(pos) = rest.find(is_delimiter) {
        let (token, tail) = rest.split_at(pos);
        let mut chars = tail.chars();
        let Some(delimiter) = chars.next() else {
            break;
        };
        let after = chars.as_str();
        if !token.is_empty() {
            result.append_with_attribute(token, key.clone());
        }
        let joins_keys = delimiter == '-'
            && !token.is_empty()
            && after.chars().next().is_some_and(|ch| !is_delimiter(ch));
        if joins_keys {
            result.append_str(KEY_HYPHEN);
        } else {
            result.append_str(&tail[..delimiter.len_utf8()]);
        }
        rest = after;
    }
    if !rest.is_empty() {
        result.append_with_attribute(rest, key);
    }
    result
}
