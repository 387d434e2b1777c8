use serde::Serialize;
use tagwrap_common::WrapWarning;

use crate::config::WrapConfig;

/// The space needed to display a string and the string to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundsResult {
    /// The text with break markers inserted, wrapped in container markers.
    pub text: String,
    /// Widest measured line plus padding, in pixels.
    pub width: u32,
    /// Line height times the number of lines, in pixels.
    pub height: u32,
    /// Degenerate input that was handled without failing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WrapWarning>,
}

impl BoundsResult {
    /// The individual lines of the result, container markers removed.
    #[must_use]
    pub fn lines<'a>(&'a self, config: &WrapConfig) -> Vec<&'a str> {
        config
            .unwrap_container(&self.text)
            .split(config.break_marker.as_str())
            .collect()
    }

    /// Number of lines in the result.
    #[must_use]
    pub fn line_count(&self, config: &WrapConfig) -> usize {
        self.lines(config).len()
    }
}

/// Assemble a [`BoundsResult`], adding the container markers only where
/// they are not already present.
#[must_use]
pub fn build(text: &str, width: u32, height: u32, config: &WrapConfig) -> BoundsResult {
    BoundsResult {
        text: config.wrap_in_container(text),
        width,
        height,
        warnings: Vec::new(),
    }
}
