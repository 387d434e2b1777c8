//! Plain-text line splitter.
//!
//! Used when the input carries no markup at all. A line that is too wide is
//! split into the number of lines its width calls for, with break markers
//! distributed at near-uniform character intervals and snapped to a nearby
//! space: first to the right of the candidate index, then to the left.
//!
//! Candidate indices are positions in the original character sequence. A
//! break never lands at or before the start of the line it closes, so the
//! breaks are strictly increasing and no empty lines are produced.

use tagwrap_common::{WrapError, WrapResult};
use tagwrap_markup::{Segment, contains_markup};

use crate::breaker::{BrokenText, Line, break_segments};
use crate::config::WrapConfig;
use crate::metrics::{FontDescriptor, FontMetrics};

/// A break chosen in the original character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BreakPoint {
    /// Character index the marker is inserted at.
    at: usize,
    /// Whether the space at `at` is replaced by the marker.
    consumes_space: bool,
}

impl BreakPoint {
    const fn replacing(at: usize) -> Self {
        Self {
            at,
            consumes_space: true,
        }
    }

    const fn forced(at: usize) -> Self {
        Self {
            at,
            consumes_space: false,
        }
    }

    /// Index of the first character of the line after this break.
    const fn next_line_start(self) -> usize {
        if self.consumes_space {
            self.at + 1
        } else {
            self.at
        }
    }
}

/// Insert break markers so `text` is split into `required_lines` lines,
/// using the default configuration.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `text` contains markup or
/// `required_lines` is zero.
pub fn insert_breaks_evenly(text: &str, required_lines: usize) -> WrapResult<String> {
    insert_breaks_evenly_with(text, required_lines, &WrapConfig::default())
}

/// Insert break markers so `text` is split into `required_lines` lines.
///
/// The split frequency is `ceil(len / required_lines)` characters. At each
/// multiple of it a space is preferred: the candidate itself, then up to
/// `config.lookaround` characters to the right, then to the left. With no
/// space in reach the marker is inserted at the candidate, splitting a word.
/// A single required line returns the text unchanged.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `text` contains markup or
/// `required_lines` is zero.
pub fn insert_breaks_evenly_with(
    text: &str,
    required_lines: usize,
    config: &WrapConfig,
) -> WrapResult<String> {
    if contains_markup(text) {
        return Err(WrapError::invalid_argument(
            "text",
            format!("plain text must not contain markup: {text}"),
        ));
    }
    if required_lines == 0 {
        return Err(WrapError::invalid_argument(
            "required_lines",
            "must be at least 1",
        ));
    }
    if required_lines == 1 {
        return Ok(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let breaks = choose_breaks(&chars, required_lines, config.lookaround);
    Ok(render(&chars, &breaks, &config.break_marker))
}

fn choose_breaks(chars: &[char], required_lines: usize, lookaround: usize) -> Vec<BreakPoint> {
    let len = chars.len();
    let split_frequency = len.div_ceil(required_lines);
    let mut breaks = Vec::with_capacity((required_lines - 1).min(len));
    if split_frequency == 0 {
        return breaks;
    }

    let mut line_start = 0;
    let mut candidate = split_frequency;
    while candidate < len && breaks.len() + 1 < required_lines {
        let index = candidate.max(line_start + 1);
        if index >= len {
            break;
        }
        let point = snap_to_space(chars, index, line_start, lookaround);

        #[cfg(feature = "wrap-trace")]
        eprintln!(
            "[SPLIT] candidate {index} -> {} ({})",
            point.at,
            if point.consumes_space { "space" } else { "forced" }
        );

        line_start = point.next_line_start();
        breaks.push(point);
        candidate += split_frequency;
    }
    breaks
}

/// Pick the break for candidate `index` on the line starting at `line_start`.
fn snap_to_space(chars: &[char], index: usize, line_start: usize, lookaround: usize) -> BreakPoint {
    if chars[index] == ' ' {
        return BreakPoint::replacing(index);
    }

    let right_end = index.saturating_add(lookaround).min(chars.len());
    if let Some(j) = (index..right_end).find(|&j| chars[j] == ' ') {
        return BreakPoint::replacing(j);
    }

    // Never reach back to the line start: a space there would close an
    // empty line.
    let left_end = (index + 1).saturating_sub(lookaround).max(line_start + 1);
    if let Some(j) = (left_end..index).rev().find(|&j| chars[j] == ' ') {
        return BreakPoint::replacing(j);
    }

    BreakPoint::forced(index)
}

fn render(chars: &[char], breaks: &[BreakPoint], marker: &str) -> String {
    let mut out = String::with_capacity(chars.len() + breaks.len() * marker.len());
    let mut pending = breaks.iter().peekable();
    for (idx, &c) in chars.iter().enumerate() {
        if let Some(point) = pending.next_if(|point| point.at == idx) {
            out.push_str(marker);
            if point.consumes_space {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Split markup-free `text` into lines that fit `max_width`.
///
/// The text is first split on existing break markers; each literal line is
/// kept if its padded width fits. Otherwise it is split evenly into
/// `max(2, ceil(width / max_width))` lines. If any of those lines is still
/// too wide, the literal line is broken greedily instead, which keeps a
/// word whole only when it starts its line.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `text` contains markup or
/// `max_width` is zero.
pub fn split_plain(
    text: &str,
    font: &FontDescriptor,
    max_width: u32,
    metrics: &dyn FontMetrics,
    config: &WrapConfig,
) -> WrapResult<BrokenText> {
    if max_width == 0 {
        return Err(WrapError::invalid_argument(
            "max_width",
            "must be greater than zero",
        ));
    }
    if contains_markup(text) {
        return Err(WrapError::invalid_argument(
            "text",
            format!("plain text must not contain markup: {text}"),
        ));
    }

    let padded = |line: &str| {
        metrics
            .min_width(line, font)
            .saturating_add(config.width_padding)
    };
    let mut broken = BrokenText::default();

    for literal in text.split(config.break_marker.as_str()) {
        let full_width = padded(literal);
        if full_width <= max_width {
            broken.lines.push(plain_line(literal));
            continue;
        }

        let needed = usize::try_from(full_width.div_ceil(max_width))
            .unwrap_or(usize::MAX)
            .max(2);
        let evenly = insert_breaks_evenly_with(literal, needed, config)?;
        let pieces: Vec<&str> = evenly.split(config.break_marker.as_str()).collect();

        if pieces.iter().all(|piece| padded(piece) <= max_width) {
            broken.lines.extend(pieces.into_iter().map(plain_line));
        } else {
            #[cfg(feature = "wrap-trace")]
            eprintln!("[SPLIT] even split of {literal:?} overflows, breaking greedily");

            let greedy = break_segments(
                &[Segment::content(literal)],
                font,
                max_width.saturating_sub(config.width_padding),
                metrics,
                config,
            );
            broken.lines.extend(greedy.lines);
            broken.warnings.extend(greedy.warnings);
        }
    }

    Ok(broken)
}

fn plain_line(text: &str) -> Line {
    Line {
        text: text.to_string(),
        content: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_is_passthrough() {
        assert_eq!(insert_breaks_evenly("any text", 1).unwrap(), "any text");
    }

    #[test]
    fn test_rejects_zero_lines() {
        assert!(matches!(
            insert_breaks_evenly("text", 0),
            Err(WrapError::InvalidArgument {
                name: "required_lines",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_markup() {
        assert!(matches!(
            insert_breaks_evenly("a <i>b</i>", 2),
            Err(WrapError::InvalidArgument { name: "text", .. })
        ));
    }

    #[test]
    fn test_candidate_space_is_replaced() {
        // len 11, two lines: candidate index 6 is 'w'; the space at 5 is
        // found by the left search after the right search fails.
        assert_eq!(
            insert_breaks_evenly("hello world", 2).unwrap(),
            "hello<br/>world"
        );
    }

    #[test]
    fn test_right_search_preferred() {
        // len 15, freq 8: index 8 is 'r', nearest space to the right is 11.
        assert_eq!(
            insert_breaks_evenly("hello world foo", 2).unwrap(),
            "hello world<br/>foo"
        );
    }

    #[test]
    fn test_forced_breaks_without_spaces() {
        assert_eq!(
            insert_breaks_evenly("abcdefghijklmnopqrstuvwxyz", 3).unwrap(),
            "abcdefghi<br/>jklmnopqr<br/>stuvwxyz"
        );
    }

    #[test]
    fn test_breaks_never_produce_empty_lines() {
        let out = insert_breaks_evenly("abc", 10).unwrap();
        assert!(out.split("<br/>").all(|piece| !piece.is_empty()));
        assert_eq!(out, "a<br/>b<br/>c");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(insert_breaks_evenly("", 3).unwrap(), "");
    }
}
