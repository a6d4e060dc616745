// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use styled_text::markup::parse_xml;
use styled_text::{Color, FontRequest, RichText};

use super::{Document, FLOAT_GAP, KEY_CAP_PADDING, RenderOptions};
use crate::{
    BlockObject, Canvas, DrawFlags, FontMetrics, ItemKind, LinkId, Placement, Point, Rect,
    Side, Size,
};

/// Every character is 10 pixels wide; lines are 20 pixels plus 4 per size step.
struct Mono;

impl FontMetrics for Mono {
    fn line_height(&self, font: &FontRequest) -> i32 {
        20 + 4 * font.size
    }

    fn text_width(&self, _font: &FontRequest, text: &str) -> i32 {
        10 * i32::try_from(text.chars().count()).unwrap()
    }
}

#[derive(Debug)]
struct Boxed(Size);

impl BlockObject for Boxed {
    fn size(&self) -> Size {
        self.0
    }

    fn draw(&self, canvas: &mut dyn Canvas, area: Rect, _flags: DrawFlags) {
        canvas.draw_key_cap(area, "box", &FontRequest::DEFAULT, Color::Static);
    }
}

fn document(page_width: i32) -> Document<Mono, Boxed> {
    let mut doc = Document::new(Mono);
    doc.set_page_width(page_width);
    doc
}

fn plain(text: &str) -> RichText {
    RichText::new(text)
}

/// Text and position of every item that is not a link marker.
fn placed(doc: &Document<Mono, Boxed>) -> Vec<(String, i32, i32)> {
    doc.items()
        .iter()
        .filter(|item| !item.is_marker())
        .map(|item| (item.text.clone(), item.pos.x, item.pos.y))
        .collect()
}

#[test]
fn wraps_at_last_fitting_space() {
    let mut doc = document(110);
    doc.add(&plain("hello world again"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("hello world"), 0, 1), (String::from("again"), 0, 21)]
    );
    assert_eq!(doc.get_document_height(), 40);
}

#[test]
fn wrapped_line_starts_at_left_margin() {
    let mut doc = document(130);
    doc.set_left_margin(20);
    doc.add(&plain("hello world again"));
    doc.finish();
    let lines = placed(&doc);
    assert_eq!(lines.len(), 2, "expected two lines: {lines:?}");
    assert_eq!(lines[0].1, 20);
    assert_eq!(lines[1].1, 20);
}

#[test]
fn break_can_fall_in_an_earlier_chunk() {
    let mut doc = document(100);
    doc.add(&plain("aaa bbb"));
    doc.add(&plain("cccccc"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("aaa"), 0, 1), (String::from("bbb"), 0, 21), (String::from("cccccc"), 30, 21)]
    );
}

#[test]
fn whole_word_moves_to_next_line() {
    let mut doc = document(100);
    doc.add(&plain("aaaa"));
    doc.add_word_separator();
    doc.add(&plain("bbbbbbbb"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("aaaa"), 0, 1), (String::from("bbbbbbbb"), 0, 21)]
    );
}

#[test]
fn overlong_word_is_split_at_first_space() {
    let mut doc = document(30);
    doc.add(&plain("abcdefgh ij"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("abcdefgh"), 0, 1), (String::from("ij"), 0, 21)]
    );
}

#[test]
fn wrapped_lines_drop_leading_spaces() {
    let mut doc = document(10);
    doc.add(&plain("a  b"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("a"), 0, 1), (String::from("b"), 0, 21)]
    );

    let mut blank = document(0);
    blank.add(&plain("   "));
    blank.finish();
    assert!(placed(&blank).is_empty(), "got {:?}", placed(&blank));
}

#[test]
fn preformatted_text_overflows() {
    let mut doc = document(30);
    doc.add_preformatted(&plain("abcdef gh\nij"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("abcdef gh"), 0, 1), (String::from("ij"), 0, 21)]
    );
    assert_eq!(doc.get_document_width(), 90);
}

#[test]
fn baseline_approximation() {
    let mut doc = document(500);
    doc.add(&parse_xml("a<big>B</big>"));
    doc.finish();
    // Line height 24; 24 - 20 - 4 + 5 and 24 - 24 - 4 + 6.
    assert_eq!(
        placed(&doc),
        [(String::from("a"), 0, 5), (String::from("B"), 10, 2)]
    );
    assert_eq!(doc.cursor(), Point::new(0, 24));
}

#[test]
fn newlines_in_text_break_lines() {
    let mut doc = document(500);
    doc.add(&plain("one\n\ntwo"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("one"), 0, 1), (String::from("two"), 0, 41)]
    );
}

#[test]
fn paragraph_gap() {
    let mut doc = document(500);
    doc.add(&plain("x"));
    doc.add_paragraph();
    assert_eq!(doc.cursor().y, 30, "half a line");

    doc.set_render_options(RenderOptions {
        full_lines_between_paragraphs: true,
    });
    doc.add(&plain("y"));
    doc.add_paragraph();
    assert_eq!(doc.cursor().y, 70, "a full line");
}

#[test]
fn tabs_and_positioned_text() {
    let mut doc = document(500);
    doc.set_left_margin(10);
    doc.add_at(20, &plain("a"));
    doc.add_right(100, &plain("abc"));
    doc.add_centered(200, &plain("ab"));
    doc.tab_to(0);
    doc.add(&plain("z"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [
            (String::from("a"), 30, 1),
            (String::from("abc"), 80, 1),
            (String::from("ab"), 200, 1),
            (String::from("z"), 220, 1),
        ]
    );
}

#[test]
fn key_caps_are_padded_and_whole() {
    let mut doc = document(500);
    doc.add(&parse_xml("<kbd>Ctrl</kbd>"));
    doc.finish();
    let item = &doc.items()[0];
    assert!(item.key_cap, "expected a key cap");
    assert!(!item.breakable, "key caps never break");
    assert_eq!(item.width, 40 + 2 * KEY_CAP_PADDING);
}

#[test]
fn right_aligned_box() {
    let mut doc = document(500);
    doc.add(&parse_xml("<align width=100 align=right>boxy text</align>"));
    assert_eq!(doc.cursor().x, 100, "cursor ends at the box edge");
    doc.finish();
    let item = &doc.items()[0];
    assert_eq!(item.text, "boxy text");
    assert_eq!(item.pos.x, 100 - 90);
    assert_eq!(item.pos.x + item.width, 100, "no right padding");
}

#[test]
fn centered_and_overfull_boxes() {
    let mut doc = document(500);
    doc.add(&parse_xml("<align width='100' align='center'>ab</align>"));
    doc.add(&parse_xml("<align width='20' align='right'>wide</align>"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [(String::from("ab"), 40, 1), (String::from("wide"), 100, 1)]
    );
}

#[test]
fn link_navigation() {
    let mut doc = document(500);
    doc.add(&parse_xml("a <a href='one'>first</a> b <a href='two'>second</a>"));
    doc.finish();

    let first = doc.get_next_link(None).unwrap();
    let second = doc.get_next_link(Some(first)).unwrap();
    assert_eq!(doc.get_next_link(Some(second)), None);
    assert_eq!(doc.get_previous_link(None), Some(second));
    assert_eq!(doc.get_previous_link(Some(second)), Some(first));
    assert_eq!(doc.get_previous_link(Some(first)), None);

    assert_eq!(doc.get_link_target(first), Some("one"));
    assert_eq!(doc.get_link_target(second), Some("two"));

    // "a " is 20 pixels, "first" follows.
    assert_eq!(doc.get_link_from_pos(Point::new(25, 5)), Some(first));
    assert_eq!(doc.get_link_from_pos(Point::new(5, 5)), None);
    assert_eq!(doc.get_link_from_pos(Point::new(105, 5)), Some(second));
}

#[test]
fn ranged_navigation_skips_invisible_links() {
    let mut doc = document(500);
    doc.add(&parse_xml("a <a href='one'>first</a> b <a href='two'>second</a>"));
    doc.finish();
    let first = doc.get_next_link(None).unwrap();
    let second = doc.get_next_link(Some(first)).unwrap();

    let right = Rect::from_xywh(90, 0, 100, 30);
    assert!(!doc.is_link_visible(first, right), "first ends at 70");
    assert!(doc.is_link_visible(second, right), "second starts at 100");
    assert_eq!(doc.get_next_link_in(None, right), Some(second));
    assert_eq!(doc.get_previous_link_in(Some(second), right), None);

    let below = Rect::from_xywh(0, 100, 500, 30);
    assert_eq!(doc.get_next_link_in(None, below), None);
}

#[test]
fn link_kind_changes_one_link() {
    let mut doc = document(500);
    doc.add(&parse_xml("<a href='one'>first</a> <a href='two'>second</a>"));
    doc.finish();
    let first = doc.get_next_link(None).unwrap();

    doc.set_link_kind(first, ItemKind::LinkFocus);
    let kinds: Vec<_> = doc.items().iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        [
            ItemKind::LinkTarget,
            ItemKind::LinkFocus,
            ItemKind::Normal,
            ItemKind::LinkTarget,
            ItemKind::Link,
        ]
    );

    doc.set_link_kind(first, ItemKind::Normal);
    assert_eq!(doc.items()[1].kind, ItemKind::LinkFocus, "non-link kinds are ignored");
}

#[test]
fn invalid_links_are_harmless() {
    let mut doc = document(500);
    doc.add(&plain("no links"));
    doc.finish();
    let bogus = LinkId(1);
    assert_eq!(doc.get_link_target(bogus), None);
    assert!(!doc.is_link_visible(bogus, Rect::from_xywh(0, 0, 500, 500)));
    doc.set_link_kind(LinkId(usize::MAX), ItemKind::LinkHover);
    assert_eq!(doc.get_next_link(Some(LinkId(usize::MAX))), None);
    assert_eq!(doc.get_previous_link(Some(LinkId(usize::MAX))), None);
}

#[test]
fn left_float_narrows_lines() {
    let mut doc = document(200);
    doc.add_float_object(Boxed(Size::new(50, 30)), Side::Left);
    assert_eq!(doc.cursor().x, 50 + FLOAT_GAP);
    doc.add(&plain("x"));
    doc.add_newline();
    doc.add(&plain("y"));
    doc.add_newline();
    doc.add(&plain("z"));
    doc.finish();
    assert_eq!(
        placed(&doc),
        [
            (String::from("x"), 55, 1),
            (String::from("y"), 55, 21),
            (String::from("z"), 0, 41),
        ]
    );
    assert_eq!(doc.objects()[0].area(), Some(Rect::from_xywh(0, 0, 50, 30)));
}

#[test]
fn right_float_shortens_lines() {
    let mut doc = document(200);
    doc.add_float_object(Boxed(Size::new(50, 40)), Side::Right);
    doc.add(&plain("aaaaaaaaaa bbbbb"));
    doc.finish();
    assert_eq!(
        doc.objects()[0].area(),
        Some(Rect::from_xywh(150, 0, 50, 40))
    );
    assert_eq!(
        placed(&doc),
        [(String::from("aaaaaaaaaa"), 0, 1), (String::from("bbbbb"), 0, 21)]
    );
}

#[test]
fn wider_float_waits_for_next_line() {
    let mut doc = document(300);
    doc.add_float_object(Boxed(Size::new(50, 30)), Side::Left);
    doc.add_float_object(Boxed(Size::new(100, 30)), Side::Left);
    assert_eq!(doc.objects()[1].area(), None, "side is busy");

    doc.add(&plain("line"));
    doc.add_newline();
    assert_eq!(doc.objects()[1].area(), None, "side is still busy");

    // The narrow float ends at y 30, inside the second line.
    doc.add(&plain("line"));
    doc.add_newline();
    assert_eq!(
        doc.objects()[1].area(),
        Some(Rect::from_xywh(0, 40, 100, 30)),
        "wider float starts with the next line, not where the narrow one ended"
    );
    assert_eq!(doc.cursor(), Point::new(100 + FLOAT_GAP, 40));

    doc.add(&plain("line"));
    doc.finish();
    assert_eq!(placed(&doc)[2], (String::from("line"), 105, 41));
    assert_eq!(doc.get_document_height(), 70);
}

#[test]
fn wider_float_starts_on_next_line() {
    let mut doc = document(300);
    doc.add_float_object(Boxed(Size::new(50, 20)), Side::Left);
    doc.add_float_object(Boxed(Size::new(100, 20)), Side::Left);
    doc.add(&plain("line"));
    doc.add_newline();
    assert_eq!(
        doc.objects()[1].area(),
        Some(Rect::from_xywh(0, 20, 100, 20))
    );

    doc.add_float_object(Boxed(Size::new(10, 10)), Side::Left);
    assert_eq!(doc.objects()[2].area(), None, "queued behind the wide one");
}

#[test]
fn narrower_float_follows_immediately() {
    let mut doc = document(300);
    doc.add_float_object(Boxed(Size::new(100, 20)), Side::Left);
    doc.add_float_object(Boxed(Size::new(50, 20)), Side::Left);
    doc.add(&plain("one"));
    doc.add_newline();
    assert_eq!(
        doc.objects()[1].area(),
        Some(Rect::from_xywh(0, 20, 50, 20))
    );
    assert_eq!(doc.cursor().x, 50 + FLOAT_GAP);
}

#[test]
fn float_waits_for_line_start() {
    let mut doc = document(300);
    doc.add(&plain("text"));
    doc.add_float_object(Boxed(Size::new(50, 20)), Side::Right);
    assert_eq!(doc.objects()[0].area(), None);
    doc.add_newline();
    assert_eq!(doc.objects()[0].area(), Some(Rect::from_xywh(250, 20, 50, 20)));
    doc.finish();
    assert_eq!(doc.get_document_height(), 40);
}

#[test]
fn float_waits_for_paragraph_gap() {
    let mut doc = document(300);
    doc.add_float_object(Boxed(Size::new(50, 10)), Side::Left);
    doc.add_float_object(Boxed(Size::new(80, 10)), Side::Left);
    doc.add_paragraph();
    assert_eq!(doc.objects()[1].area(), Some(Rect::from_xywh(0, 10, 80, 10)));
    assert_eq!(doc.cursor(), Point::new(80 + FLOAT_GAP, 10));
}

#[test]
fn centered_object_interrupts_flow() {
    let mut doc = document(200);
    doc.add(&plain("above"));
    doc.add_center_object(Boxed(Size::new(100, 50)));
    doc.add(&plain("below"));
    doc.finish();
    let block = &doc.objects()[0];
    assert_eq!(block.placement(), Placement::Center);
    assert_eq!(block.area(), Some(Rect::from_xywh(50, 20, 100, 50)));
    assert_eq!(placed(&doc)[1], (String::from("below"), 0, 71));
}

#[test]
fn degenerate_geometry() {
    let mut empty = document(0);
    empty.finish();
    assert_eq!(empty.get_document_height(), 0);
    assert_eq!(empty.get_document_width(), 0);
    assert_eq!(empty.get_next_link(None), None);
    assert_eq!(empty.get_link_from_pos(Point::new(0, 0)), None);

    let mut narrow = document(0);
    narrow.add(&plain("a b c"));
    narrow.add_float_object(Boxed(Size::new(0, 0)), Side::Left);
    narrow.add_float_object(Boxed(Size::new(500, 10)), Side::Right);
    narrow.finish();
    let words: Vec<_> = placed(&narrow).into_iter().map(|(text, _, _)| text).collect();
    assert_eq!(words, ["a", "b", "c"]);
}

#[test]
fn clear_resets_content() {
    let mut doc = document(100);
    doc.set_left_margin(10);
    doc.add(&parse_xml("<a href='x'>link</a>"));
    doc.add_float_object(Boxed(Size::new(10, 10)), Side::Left);
    doc.finish();
    doc.clear();
    assert!(doc.items().is_empty());
    assert!(doc.objects().is_empty());
    assert_eq!(doc.cursor(), Point::new(0, 0));
    assert_eq!(doc.left_margin(), 0);
    assert_eq!(doc.page_width(), 100);
}

#[derive(Default)]
struct Recorder(Vec<(String, Point, Color)>);

impl Canvas for Recorder {
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        _font: &FontRequest,
        color: Color,
        _underlined: bool,
    ) {
        self.0.push((String::from(text), origin, color));
    }

    fn draw_key_cap(&mut self, area: Rect, text: &str, _font: &FontRequest, color: Color) {
        self.0.push((String::from(text), area.origin, color));
    }
}

#[test]
fn draw_translates_and_colors_links() {
    let mut doc = document(500);
    doc.add(&parse_xml("<font color='red'>a</font> <a href='x'>b</a>"));
    doc.add_newline();
    doc.add(&plain("second"));
    doc.finish();
    let link = doc.get_next_link(None).unwrap();
    doc.set_link_kind(link, ItemKind::LinkHover);

    let mut canvas = Recorder::default();
    doc.draw(&mut canvas, Rect::from_xywh(100, 50, 500, 20), 0);
    assert_eq!(
        canvas.0,
        [
            (String::from("a"), Point::new(100, 51), Color::Red),
            (String::from(" "), Point::new(110, 51), Color::Static),
            (String::from("b"), Point::new(120, 51), Color::LinkShade),
        ]
    );

    let mut scrolled = Recorder::default();
    doc.draw(&mut scrolled, Rect::from_xywh(0, 0, 500, 20), 21);
    assert_eq!(
        scrolled.0,
        [(String::from("second"), Point::new(0, 0), Color::Static)]
    );
}

#[test]
fn draw_includes_placed_objects() {
    let mut doc = document(200);
    doc.add_center_object(Boxed(Size::new(20, 20)));
    doc.finish();
    let mut canvas = Recorder::default();
    doc.draw(&mut canvas, Rect::from_xywh(0, 0, 200, 100), 0);
    assert_eq!(
        canvas.0,
        [(String::from("box"), Point::new(90, 0), Color::Static)]
    );
}
