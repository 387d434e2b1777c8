//! Integration tests for font loading and fontdue-backed measurement.
//!
//! Nothing here requires a font to be installed: the system font test only
//! checks measurements when a font happens to be found.

use std::path::Path;

use tagwrap_fontdue::{
    FontLoadError, FontdueFontMetrics, load_font_from_bytes, load_font_from_path, load_system_font,
};
use tagwrap_layout::{BoundsCalculator, FontDescriptor, FontMetrics, FontStyle};

#[test]
fn test_empty_bytes_rejected() {
    assert!(matches!(
        load_font_from_bytes(Vec::new(), "empty"),
        Err(FontLoadError::Parse { .. })
    ));
}

#[test]
fn test_directory_is_not_a_font() {
    assert!(matches!(
        load_font_from_path(Path::new("/")),
        Err(FontLoadError::Io { .. })
    ));
}

#[test]
fn test_not_found_message_counts_paths() {
    let err = FontLoadError::NotFound {
        searched: vec!["a.ttf".to_string(), "b.ttf".to_string()],
    };
    assert_eq!(err.to_string(), "no usable font found in 2 searched locations");
}

#[test]
fn test_system_font_measures_when_available() {
    let Ok(font) = load_system_font(FontStyle::Regular) else {
        return;
    };
    let metrics = FontdueFontMetrics::new(&font);
    let descriptor = FontDescriptor::default_small();

    let short = metrics.min_width("ab", &descriptor);
    let long = metrics.min_width("ab ab ab", &descriptor);
    assert!(short > 0);
    assert!(long > short);
    // Markup is stripped before measurement, control characters never count.
    assert_eq!(metrics.min_width("a\tb", &descriptor), short);
    assert!(metrics.min_height("", &descriptor) >= 20);

    let calc = BoundsCalculator::new(&metrics);
    let result = calc
        .measure_and_wrap_with("<b>hello</b> world", &descriptor, 1200)
        .unwrap();
    assert_eq!(result.text, "<html><b>hello</b> world</html>");
}
