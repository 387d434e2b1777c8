//! Tuning values for the line breaker.
//!
//! All constants are gathered in [`WrapConfig`] and passed into the engine
//! instead of being hard-coded, so tests can exercise boundary behavior with
//! small values and callers can load overrides from a JSON file.

use serde::{Deserialize, Serialize};
use tagwrap_common::{WrapError, WrapResult};
use tagwrap_markup::contains_markup;

/// Number of characters searched around a candidate break for a space.
pub const LOOKAROUND_CHARS: usize = 7;

/// Pixels added to every measured line width.
pub const WIDTH_PADDING: u32 = 5;

/// Maximum line width used when the caller does not supply one.
pub const DEFAULT_MAX_WIDTH: u32 = 1200;

/// The line separator inserted into output text.
pub const BREAK_MARKER: &str = "<br/>";

/// Marker prepended to every result text.
pub const CONTAINER_START: &str = "<html>";

/// Marker appended to every result text.
pub const CONTAINER_END: &str = "</html>";

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// How far to look back (markup path) or around (plain path) for a
    /// space before splitting a word.
    pub lookaround: usize,
    /// Padding added to measured widths.
    pub width_padding: u32,
    /// Width limit used by the calls that do not take one.
    pub default_max_width: u32,
    /// Line separator token. Must itself be markup.
    pub break_marker: String,
    /// Start container marker.
    pub container_start: String,
    /// End container marker.
    pub container_end: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            lookaround: LOOKAROUND_CHARS,
            width_padding: WIDTH_PADDING,
            default_max_width: DEFAULT_MAX_WIDTH,
            break_marker: BREAK_MARKER.to_string(),
            container_start: CONTAINER_START.to_string(),
            container_end: CONTAINER_END.to_string(),
        }
    }
}

impl WrapConfig {
    /// Check the configuration for values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::InvalidArgument`] if a marker is empty, if the
    /// break marker is not recognised as markup (re-wrapping a result would
    /// then measure the marker as text), or if the default width is zero.
    pub fn validate(&self) -> WrapResult<()> {
        if self.break_marker.is_empty()
            || self.container_start.is_empty()
            || self.container_end.is_empty()
        {
            return Err(WrapError::invalid_argument(
                "config",
                "break and container markers must not be empty",
            ));
        }
        if !contains_markup(&self.break_marker) {
            return Err(WrapError::invalid_argument(
                "config",
                format!("break marker '{}' is not a markup tag", self.break_marker),
            ));
        }
        if self.default_max_width == 0 {
            return Err(WrapError::invalid_argument(
                "config",
                "default_max_width must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Wrap `text` in the container markers, adding each only if absent.
    #[must_use]
    pub fn wrap_in_container(&self, text: &str) -> String {
        let mut wrapped = String::with_capacity(
            text.len() + self.container_start.len() + self.container_end.len(),
        );
        if !text.starts_with(&self.container_start) {
            wrapped.push_str(&self.container_start);
        }
        wrapped.push_str(text);
        if !wrapped.ends_with(&self.container_end) {
            wrapped.push_str(&self.container_end);
        }
        wrapped
    }

    /// Strip the container markers from `text` if present.
    #[must_use]
    pub fn unwrap_container<'a>(&self, text: &'a str) -> &'a str {
        let inner = text.strip_prefix(&self.container_start).unwrap_or(text);
        inner.strip_suffix(&self.container_end).unwrap_or(inner)
    }
}
