use crate::segmenter::segment;
use crate::{TAG_CLOSE, TAG_OPEN};

/// Returns whether `text` contains at least one inline tag.
///
/// A tag is a `<`, one or more characters other than `>`, then a `>`.
/// An empty `<>` pair does not count.
#[must_use]
pub fn contains_markup(text: &str) -> bool {
    let mut rest = text;
    while let Some(open) = rest.find(TAG_OPEN) {
        let after = &rest[open + TAG_OPEN.len_utf8()..];
        match after.find(TAG_CLOSE) {
            // "<>" has an empty body; a later '<' may still start a tag.
            Some(0) => rest = after,
            Some(_) => return true,
            None => return false,
        }
    }
    false
}

/// Remove every markup segment from `text`, keeping content verbatim.
///
/// This is the view of a line that gets measured: tags are zero-width.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    segment(text)
        .into_iter()
        .filter(|s| s.is_content())
        .map(|s| s.text)
        .collect()
}
