use strum_macros::Display;

/// Whether a segment is an inline tag or wrappable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SegmentKind {
    /// An inline tag, including its `<` and `>` delimiters. Passed through
    /// verbatim and treated as zero-width.
    Markup,
    /// Delimiter-free text subject to measurement and line breaking.
    Content,
}

/// A unit of tag-segmented input.
///
/// Segments borrow from the scanned input; concatenating the `text` of every
/// segment in order reproduces that input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// What kind of segment this is.
    pub kind: SegmentKind,
    /// The raw substring this segment covers.
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    /// Create a markup segment.
    #[must_use]
    pub const fn markup(text: &'a str) -> Self {
        Self {
            kind: SegmentKind::Markup,
            text,
        }
    }

    /// Create a content segment.
    #[must_use]
    pub const fn content(text: &'a str) -> Self {
        Self {
            kind: SegmentKind::Content,
            text,
        }
    }

    /// Returns true for [`SegmentKind::Markup`] segments.
    #[must_use]
    pub fn is_markup(&self) -> bool {
        self.kind == SegmentKind::Markup
    }

    /// Returns true for [`SegmentKind::Content`] segments.
    #[must_use]
    pub fn is_content(&self) -> bool {
        self.kind == SegmentKind::Content
    }
}
