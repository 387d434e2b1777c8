//! Integration tests for the tag segmenter.

// quickcheck hands generated inputs over by value.
#![allow(clippy::needless_pass_by_value)]

use quickcheck_macros::quickcheck;
use tagwrap_markup::{Segment, SegmentKind, contains_markup, segment, strip_markup};

/// Helper to collect `(kind, text)` pairs for compact assertions
fn kinds(input: &str) -> Vec<(SegmentKind, &str)> {
    segment(input).into_iter().map(|s| (s.kind, s.text)).collect()
}

#[test]
fn test_plain_text_is_single_content_segment() {
    assert_eq!(
        kinds("Hello world"),
        vec![(SegmentKind::Content, "Hello world")]
    );
}

#[test]
fn test_inline_tags() {
    assert_eq!(
        kinds("<b>hi</b> there"),
        vec![
            (SegmentKind::Markup, "<b>"),
            (SegmentKind::Content, "hi"),
            (SegmentKind::Markup, "</b>"),
            (SegmentKind::Content, " there"),
        ]
    );
}

#[test]
fn test_tag_with_attributes_is_one_segment() {
    assert_eq!(
        kinds("a<font color=\"red\">b</font>"),
        vec![
            (SegmentKind::Content, "a"),
            (SegmentKind::Markup, "<font color=\"red\">"),
            (SegmentKind::Content, "b"),
            (SegmentKind::Markup, "</font>"),
        ]
    );
}

#[test]
fn test_dangling_tag_is_trailing_markup() {
    assert_eq!(
        kinds("text <unclosed"),
        vec![
            (SegmentKind::Content, "text "),
            (SegmentKind::Markup, "<unclosed"),
        ]
    );
}

#[test]
fn test_nested_open_stays_in_tag() {
    assert_eq!(
        kinds("<a<b>c"),
        vec![(SegmentKind::Markup, "<a<b>"), (SegmentKind::Content, "c")]
    );
}

#[test]
fn test_stray_close_is_content() {
    assert_eq!(kinds("a > b"), vec![(SegmentKind::Content, "a > b")]);
}

#[test]
fn test_multibyte_content() {
    let segments = segment("<i>héllo wörld</i>");
    assert_eq!(segments[1], Segment::content("héllo wörld"));
}

#[test]
fn test_contains_markup_examples() {
    assert!(!contains_markup("plain text only"));
    assert!(contains_markup("a <i>b</i> c"));
}

#[test]
fn test_strip_markup_keeps_content_order() {
    assert_eq!(strip_markup("<html>a<br/>b <i>c</i></html>"), "ab c");
}

#[quickcheck]
fn prop_segments_concatenate_to_input(input: String) -> bool {
    let joined: String = segment(&input).iter().map(|s| s.text).collect();
    joined == input
}

#[quickcheck]
fn prop_no_empty_segments(input: String) -> bool {
    segment(&input).iter().all(|s| !s.text.is_empty())
}

#[quickcheck]
fn prop_markup_segments_start_with_open(input: String) -> bool {
    segment(&input)
        .iter()
        .filter(|s| s.is_markup())
        .all(|s| s.text.starts_with('<'))
}

#[quickcheck]
fn prop_content_segments_have_no_open(input: String) -> bool {
    segment(&input)
        .iter()
        .filter(|s| s.is_content())
        .all(|s| !s.text.contains('<'))
}
