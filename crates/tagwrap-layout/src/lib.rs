//! Line breaking and bounds computation for the tagwrap engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Markup-Aware Line Breaker** - greedy, character-at-a-time breaking
//!   over tag segments with a bounded lookback for spaces
//! - **Plain Line Splitter** - even distribution of breaks over markup-free
//!   text, snapped to nearby spaces
//! - **Bounds Result Builder** - container wrapping, width and height
//! - **Measurement interface** - the injected [`FontMetrics`] capability and
//!   a fixed-ratio [`ApproximateFontMetrics`] fallback
//!
//! # Not Implemented
//!
//! - Bidirectional text, hyphenation, justification
//! - Kerning-exact widths (measurement is whatever the metrics report)
//!
//! # Module Structure
//!
//! - [`metrics`] - font descriptors and the measurement trait
//! - [`config`] - tuning constants and [`WrapConfig`]
//! - [`breaker`] - markup-aware greedy line breaker
//! - [`splitter`] - plain-text even splitter
//! - [`bounds`] - result type and builder
//! - [`engine`] - public entry points

/// Result type and builder.
pub mod bounds;
/// Markup-aware greedy line breaker.
pub mod breaker;
/// Tuning constants and configuration.
pub mod config;
/// Public entry points.
pub mod engine;
/// Font descriptors and the measurement trait.
pub mod metrics;
/// Plain-text even splitter.
pub mod splitter;

// Re-exports for convenience
pub use bounds::{BoundsResult, build};
pub use breaker::{BrokenText, Line, break_segments};
pub use config::{
    BREAK_MARKER, CONTAINER_END, CONTAINER_START, DEFAULT_MAX_WIDTH, LOOKAROUND_CHARS,
    WIDTH_PADDING, WrapConfig,
};
pub use engine::{BoundsCalculator, measure_and_wrap};
pub use metrics::{ApproximateFontMetrics, FontDescriptor, FontMetrics, FontStyle};
pub use splitter::{insert_breaks_evenly, insert_breaks_evenly_with, split_plain};
pub use tagwrap_common::{WrapError, WrapResult, WrapWarning};
pub use tagwrap_markup::contains_markup;
