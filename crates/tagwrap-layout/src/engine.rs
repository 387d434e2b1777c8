//! Entry points tying segmentation, breaking and bounds assembly together.
//!
//! Every call owns its segment list and line accumulator; nothing is cached
//! between calls, so one [`BoundsCalculator`] can be shared across threads.

use tagwrap_common::warning::warn_once;
use tagwrap_common::{WrapError, WrapResult};
use tagwrap_markup::{contains_markup, segment, strip_markup};

use crate::bounds::{BoundsResult, build};
use crate::breaker::{BrokenText, break_segments};
use crate::config::WrapConfig;
use crate::metrics::{FontDescriptor, FontMetrics};
use crate::splitter::{insert_breaks_evenly_with, split_plain};

/// Compute the bounds needed to display `text` in `font` without exceeding
/// `max_width`, and the text rewritten with break markers.
///
/// Text containing markup is broken greedily with tags treated as
/// zero-width; plain text is split evenly. Lines consisting of a single
/// token with no spaces are never split even when they overflow; such lines
/// are reported in [`BoundsResult::warnings`].
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `text` is empty, `max_width`
/// is zero, the font size is not a positive finite number, or `config` is
/// invalid.
pub fn measure_and_wrap(
    text: &str,
    font: &FontDescriptor,
    max_width: u32,
    metrics: &dyn FontMetrics,
    config: &WrapConfig,
) -> WrapResult<BoundsResult> {
    if text.is_empty() {
        return Err(WrapError::invalid_argument("text", "must not be empty"));
    }
    if max_width == 0 {
        return Err(WrapError::invalid_argument(
            "max_width",
            "must be greater than zero",
        ));
    }
    if !(font.size.is_finite() && font.size > 0.0) {
        return Err(WrapError::invalid_argument(
            "font",
            format!("size must be a positive number, got {}", font.size),
        ));
    }
    config.validate()?;

    let broken = if contains_markup(text) {
        break_segments(&segment(text), font, max_width, metrics, config)
    } else {
        split_plain(text, font, max_width, metrics, config)?
    };

    let line_height = metrics.min_height(&strip_markup(text), font);
    Ok(assemble(broken, line_height, font, metrics, config))
}

fn assemble(
    broken: BrokenText,
    line_height: u32,
    font: &FontDescriptor,
    metrics: &dyn FontMetrics,
    config: &WrapConfig,
) -> BoundsResult {
    let widest = broken
        .lines
        .iter()
        .map(|line| metrics.min_width(&line.content, font))
        .max()
        .unwrap_or(0);
    let line_count = u32::try_from(broken.lines.len()).unwrap_or(u32::MAX);

    let mut result = build(
        &broken.join(&config.break_marker),
        widest.saturating_add(config.width_padding),
        line_height.saturating_mul(line_count),
        config,
    );
    for warning in &broken.warnings {
        warn_once("Wrap", &warning.to_string());
    }
    result.warnings = broken.warnings;
    result
}

/// Bounds calculation bound to one set of font metrics and configuration.
///
/// Mirrors the three ways callers ask for bounds: with everything
/// defaulted, with a font, or with a font and a width.
pub struct BoundsCalculator<'m> {
    metrics: &'m dyn FontMetrics,
    config: WrapConfig,
}

impl<'m> BoundsCalculator<'m> {
    /// Create a calculator with the default configuration.
    #[must_use]
    pub fn new(metrics: &'m dyn FontMetrics) -> Self {
        Self {
            metrics,
            config: WrapConfig::default(),
        }
    }

    /// Create a calculator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::InvalidArgument`] if `config` fails
    /// [`WrapConfig::validate`].
    pub fn with_config(metrics: &'m dyn FontMetrics, config: WrapConfig) -> WrapResult<Self> {
        config.validate()?;
        Ok(Self { metrics, config })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Bounds for `text` in the default small font at the default width.
    ///
    /// # Errors
    ///
    /// See [`measure_and_wrap`].
    pub fn measure_and_wrap(&self, text: &str) -> WrapResult<BoundsResult> {
        self.measure_and_wrap_with_font(text, &FontDescriptor::default_small())
    }

    /// Bounds for `text` in `font` at the default width.
    ///
    /// # Errors
    ///
    /// See [`measure_and_wrap`].
    pub fn measure_and_wrap_with_font(
        &self,
        text: &str,
        font: &FontDescriptor,
    ) -> WrapResult<BoundsResult> {
        self.measure_and_wrap_with(text, font, self.config.default_max_width)
    }

    /// Bounds for `text` in `font` within `max_width`.
    ///
    /// # Errors
    ///
    /// See [`measure_and_wrap`].
    pub fn measure_and_wrap_with(
        &self,
        text: &str,
        font: &FontDescriptor,
        max_width: u32,
    ) -> WrapResult<BoundsResult> {
        measure_and_wrap(text, font, max_width, self.metrics, &self.config)
    }

    /// Split markup-free `text` into `required_lines` lines.
    ///
    /// # Errors
    ///
    /// See [`insert_breaks_evenly_with`].
    pub fn insert_breaks_evenly(&self, text: &str, required_lines: usize) -> WrapResult<String> {
        insert_breaks_evenly_with(text, required_lines, &self.config)
    }
}
