use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use tagwrap_layout::FontStyle;
use thiserror::Error;

/// Common system font paths to search for a default (regular) font.
const FONT_SEARCH_PATHS: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// System font paths for bold variants.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeuib.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
];

/// System font paths for italic variants.
const FONT_ITALIC_SEARCH_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeuii.ttf",
    "C:\\Windows\\Fonts\\ariali.ttf",
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/Library/Fonts/Arial Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansOblique.ttf",
];

/// System font paths for bold-italic variants.
const FONT_BOLD_ITALIC_SEARCH_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeuiz.ttf",
    "C:\\Windows\\Fonts\\arialbi.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf",
    "/Library/Fonts/Arial Bold Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBoldOblique.ttf",
];

/// Errors that can occur when loading a font.
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// The font file could not be read.
    #[error("failed to read font file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data is not a font fontdue can parse.
    #[error("failed to parse font {path}: {reason}")]
    Parse {
        /// Where the data came from.
        path: String,
        /// Parser message.
        reason: &'static str,
    },

    /// None of the searched locations held a usable font.
    #[error("no usable font found in {} searched locations", searched.len())]
    NotFound {
        /// Every path that was tried.
        searched: Vec<String>,
    },
}

/// Parse a font from raw bytes. `origin` names the data in errors.
///
/// # Errors
///
/// Returns [`FontLoadError::Parse`] if fontdue rejects the data.
pub fn load_font_from_bytes(data: Vec<u8>, origin: &str) -> Result<Font, FontLoadError> {
    Font::from_bytes(data, FontSettings::default()).map_err(|reason| FontLoadError::Parse {
        path: origin.to_string(),
        reason,
    })
}

/// Read and parse a font file.
///
/// # Errors
///
/// Returns [`FontLoadError::Io`] if the file cannot be read and
/// [`FontLoadError::Parse`] if it is not a font.
pub fn load_font_from_path(path: &Path) -> Result<Font, FontLoadError> {
    let data = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_font_from_bytes(data, &path.display().to_string())
}

/// Try to load a font from a list of filesystem paths.
fn load_font_from_paths(paths: &[&str], label: &str) -> Option<Font> {
    for path in paths {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            eprintln!("Loaded {label} font: {path}");
            return Some(font);
        }
    }
    None
}

const fn search_paths(style: FontStyle) -> &'static [&'static str] {
    match (style.is_bold(), style.is_italic()) {
        (false, false) => FONT_SEARCH_PATHS,
        (true, false) => FONT_BOLD_SEARCH_PATHS,
        (false, true) => FONT_ITALIC_SEARCH_PATHS,
        (true, true) => FONT_BOLD_ITALIC_SEARCH_PATHS,
    }
}

/// Find a system font for `style`, falling back to the regular face.
///
/// # Errors
///
/// Returns [`FontLoadError::NotFound`] listing every searched path if no
/// candidate could be read and parsed.
pub fn load_system_font(style: FontStyle) -> Result<Font, FontLoadError> {
    let mut candidates = vec![search_paths(style)];
    if style != FontStyle::Regular {
        candidates.push(FONT_SEARCH_PATHS);
    }
    load_first(&candidates, &style.to_string())
}

fn load_first(candidates: &[&[&str]], label: &str) -> Result<Font, FontLoadError> {
    candidates
        .iter()
        .find_map(|paths| load_font_from_paths(paths, label))
        .ok_or_else(|| FontLoadError::NotFound {
            searched: candidates
                .iter()
                .flat_map(|paths| paths.iter().map(ToString::to_string))
                .collect(),
        })
}
