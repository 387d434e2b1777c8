//! Integration tests for the plain-text splitter.

use tagwrap_layout::{
    FontDescriptor, FontMetrics, WrapConfig, WrapError, insert_breaks_evenly,
    insert_breaks_evenly_with, split_plain,
};

/// Every character is 10px wide; every line is 20px tall.
struct MonospaceMetrics;

impl FontMetrics for MonospaceMetrics {
    fn min_width(&self, text: &str, _font: &FontDescriptor) -> u32 {
        u32::try_from(text.chars().count()).unwrap() * 10
    }

    fn min_height(&self, _text: &str, _font: &FontDescriptor) -> u32 {
        20
    }
}

fn split(text: &str, max_width: u32) -> Vec<String> {
    let font = FontDescriptor::default_small();
    split_plain(
        text,
        &font,
        max_width,
        &MonospaceMetrics,
        &WrapConfig::default(),
    )
    .unwrap()
    .lines
    .into_iter()
    .map(|line| line.text)
    .collect()
}

#[test]
fn test_alphabet_into_three_lines() {
    let out = insert_breaks_evenly("abcdefghijklmnopqrstuvwxyz", 3).unwrap();
    assert_eq!(out.matches("<br/>").count(), 2);
    // Split frequency is ceil(26 / 3) = 9 with no spaces to snap to.
    assert_eq!(out.find("<br/>"), Some(9));
    assert_eq!(out, "abcdefghi<br/>jklmnopqr<br/>stuvwxyz");
}

#[test]
fn test_forced_mid_word_breaks() {
    let out = insert_breaks_evenly("thisisonelongwordwithnospaces", 4).unwrap();
    assert_eq!(out, "thisison<br/>elongwor<br/>dwithnos<br/>paces");
}

#[test]
fn test_one_line_is_noop() {
    assert_eq!(insert_breaks_evenly("any text", 1).unwrap(), "any text");
}

#[test]
fn test_snaps_right_to_space() {
    assert_eq!(
        insert_breaks_evenly("one two three four", 2).unwrap(),
        "one two three<br/>four"
    );
}

#[test]
fn test_breaks_counted_in_characters() {
    assert_eq!(
        insert_breaks_evenly("ééééé ççççç", 2).unwrap(),
        "ééééé<br/>ççççç"
    );
}

#[test]
fn test_custom_marker() {
    let config = WrapConfig {
        break_marker: "<n/>".to_string(),
        ..WrapConfig::default()
    };
    assert_eq!(
        insert_breaks_evenly_with("hello world", 2, &config).unwrap(),
        "hello<n/>world"
    );
}

#[test]
fn test_markup_rejected() {
    assert!(matches!(
        insert_breaks_evenly("<b>bold</b>", 2),
        Err(WrapError::InvalidArgument { name: "text", .. })
    ));
}

#[test]
fn test_split_plain_keeps_fitting_text() {
    assert_eq!(split("abcd efgh", 95), vec!["abcd efgh"]);
}

#[test]
fn test_split_plain_padding_pushes_over() {
    assert_eq!(split("abcd efgh", 94), vec!["abcd", "efgh"]);
}

#[test]
fn test_split_plain_falls_back_to_greedy() {
    // An even split into two lines gives "aaaa bbbb" which is too wide.
    assert_eq!(
        split("aaaa bbbb cccc", 80),
        vec!["aaaa", "bbbb", "cccc"]
    );
}

#[test]
fn test_split_plain_reports_overflowing_token() {
    let font = FontDescriptor::default_small();
    let broken = split_plain(
        "abcdefghij",
        &font,
        12,
        &MonospaceMetrics,
        &WrapConfig::default(),
    )
    .unwrap();
    // Evenly split pieces would still overflow, so the word is kept whole.
    assert_eq!(broken.lines.len(), 1);
    assert_eq!(broken.lines[0].text, "abcdefghij");
    assert_eq!(broken.warnings.len(), 1);
}

#[test]
fn test_split_plain_greedy_fallback_splits_long_word_fully() {
    // The even split snaps right to the second space and overflows; the
    // greedy breaker then splits the long last word into fitting pieces.
    let lines = split("ab cdefghij klmnopqrstuvwxyzabcd", 105);
    assert_eq!(lines, vec!["ab cdefghi", "j klmnopqr", "stuvwxyzab", "cd"]);
}

#[test]
fn test_split_plain_rejects_zero_width() {
    let font = FontDescriptor::default_small();
    assert!(
        split_plain(
            "text",
            &font,
            0,
            &MonospaceMetrics,
            &WrapConfig::default()
        )
        .is_err()
    );
}
