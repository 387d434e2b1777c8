//! Text measurement backed by real font files.
//!
//! [`FontdueFontMetrics`] implements [`tagwrap_layout::FontMetrics`] using
//! fontdue's per-glyph advance widths, and the loader functions find and
//! parse a font from bytes, a path, or the usual system font locations.

/// Font file loading.
pub mod loader;
/// The fontdue-backed [`tagwrap_layout::FontMetrics`] implementation.
pub mod metrics;

pub use fontdue::Font;
pub use loader::{FontLoadError, load_font_from_bytes, load_font_from_path, load_system_font};
pub use metrics::FontdueFontMetrics;
