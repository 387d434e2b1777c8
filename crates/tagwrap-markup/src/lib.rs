//! Inline markup segmentation for the tagwrap engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Markup detection** - whether a string carries any `<...>` tag at all
//! - **Tag Segmenter** - a single left-to-right scan splitting text into
//!   `Markup` and `Content` segments with a two-state machine
//! - **Markup stripping** - the content-only view used for measurement
//!
//! # Not Implemented
//!
//! - Attribute parsing or tag name validation
//! - Character reference decoding (`&amp;` is measured literally)
//! - Tag balancing; unbalanced markup degrades into best-effort segments

/// Markup detection and stripping helpers.
pub mod detect;
/// Segment types produced by the segmenter.
pub mod segment;
/// Two-state segmenter implementation.
pub mod segmenter;

pub use detect::{contains_markup, strip_markup};
pub use segment::{Segment, SegmentKind};
pub use segmenter::{ScanState, Segmenter, Transition, segment};

/// The opening tag delimiter.
pub const TAG_OPEN: char = '<';

/// The closing tag delimiter.
pub const TAG_CLOSE: char = '>';
