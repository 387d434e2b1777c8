//! Markup-aware greedy line breaker.
//!
//! Walks a segment list one content character at a time, keeping the line
//! under construction as a list of pieces. After each character the
//! markup-stripped line is measured; when it first exceeds the limit a
//! break is chosen, in order of preference:
//!
//! 1. the overflowing character is a space: break there and drop it;
//! 2. a space lies within the last `lookaround` content characters: break
//!    at that space, carrying the rest of the word to the new line;
//! 3. the line is one whitespace-free run that began at a word boundary: it
//!    is an unbreakable token and is left to overflow intact (reported as a
//!    [`WrapWarning`]);
//! 4. otherwise force a break before the character, splitting the word.
//!
//! Once a word has been split by rule 4 its remaining pieces keep being
//! force-broken, so no fragment of a split word overflows. Spaces at the
//! start of a line opened by an inserted break are dropped. A markup segment
//! equal to the break marker ends the current line.

use tagwrap_common::WrapWarning;
use tagwrap_markup::{Segment, SegmentKind};

use crate::config::WrapConfig;
use crate::metrics::{FontDescriptor, FontMetrics};

/// A finished line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// The line text, markup included.
    pub text: String,
    /// The line text with markup removed. This is what gets measured.
    pub content: String,
}

/// Output of the line breaker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrokenText {
    /// Lines in order.
    pub lines: Vec<Line>,
    /// Soft diagnostics raised while breaking.
    pub warnings: Vec<WrapWarning>,
}

impl BrokenText {
    /// Join the lines with `marker` between consecutive lines.
    #[must_use]
    pub fn join(&self, marker: &str) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join(marker)
    }
}

/// One piece of the line under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Markup(&'a str),
    Char(char),
}

/// How the previous line was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    /// A break chosen by the breaker.
    Inserted,
    /// A break marker present in the input.
    Explicit,
}

/// Accumulator owned by a single breaker invocation.
struct LineBreakState<'a, 'm> {
    metrics: &'m dyn FontMetrics,
    font: &'m FontDescriptor,
    limit: u32,
    lookaround: usize,
    lines: Vec<Line>,
    current: Vec<Piece<'a>>,
    /// Content-only view of `current`, kept in step with it.
    content: String,
    /// Whether the current line was allowed to overflow.
    overflowing: bool,
    /// Whether the current line continues a word split by a forced break.
    mid_word: bool,
    last_end: Option<LineEnd>,
    warnings: Vec<WrapWarning>,
}

impl<'a, 'm> LineBreakState<'a, 'm> {
    fn new(
        metrics: &'m dyn FontMetrics,
        font: &'m FontDescriptor,
        limit: u32,
        lookaround: usize,
    ) -> Self {
        Self {
            metrics,
            font,
            limit,
            lookaround,
            lines: Vec::new(),
            current: Vec::new(),
            content: String::new(),
            overflowing: false,
            mid_word: false,
            last_end: None,
            warnings: Vec::new(),
        }
    }

    fn measure(&self, text: &str) -> u32 {
        self.metrics.min_width(text, self.font)
    }

    fn push_markup(&mut self, markup: &'a str) {
        self.current.push(Piece::Markup(markup));
    }

    fn push_unchecked(&mut self, c: char) {
        if c == ' ' {
            self.mid_word = false;
        }
        self.current.push(Piece::Char(c));
        self.content.push(c);
    }

    /// Whether the line has a space after some content, i.e. somewhere it
    /// could be broken without leaving an empty line.
    fn has_inner_space(&self) -> bool {
        self.content.trim_start_matches(' ').contains(' ')
    }

    /// Append one content character, breaking the line first if needed.
    fn push_char(&mut self, c: char) {
        if c == ' ' && self.content.is_empty() && self.last_end == Some(LineEnd::Inserted) {
            return;
        }

        let mut candidate = String::with_capacity(self.content.len() + c.len_utf8());
        candidate.push_str(&self.content);
        candidate.push(c);
        if self.measure(&candidate) <= self.limit {
            self.push_unchecked(c);
            return;
        }

        if self.content.is_empty() {
            // A lone character wider than the limit cannot be split further.
            self.overflowing = true;
            self.push_unchecked(c);
        } else if c == ' ' {
            #[cfg(feature = "wrap-trace")]
            eprintln!("[WRAP] break at overflowing space after {:?}", self.content);
            self.close_line(LineEnd::Inserted);
        } else if let Some(idx) = self.lookback_space() {
            #[cfg(feature = "wrap-trace")]
            eprintln!("[WRAP] break at space piece {idx} in {:?}", self.content);
            self.break_at_space(idx);
            self.push_char(c);
        } else if !self.mid_word && !self.has_inner_space() {
            #[cfg(feature = "wrap-trace")]
            eprintln!("[WRAP] unbreakable token {:?} overflows", self.content);
            self.overflowing = true;
            self.push_unchecked(c);
        } else {
            #[cfg(feature = "wrap-trace")]
            eprintln!("[WRAP] forced break before {c:?} in {:?}", self.content);
            self.close_line(LineEnd::Inserted);
            self.mid_word = true;
            self.push_char(c);
        }
    }

    /// Index into `current` of the nearest space among the last
    /// `lookaround` content characters. Markup pieces are not counted, and
    /// a space with no content before it on the line is not a candidate.
    fn lookback_space(&self) -> Option<usize> {
        self.current
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(idx, piece)| match piece {
                Piece::Char(c) => Some((idx, *c)),
                Piece::Markup(_) => None,
            })
            .take(self.lookaround)
            .find(|&(idx, c)| c == ' ' && self.has_content_before(idx))
            .map(|(idx, _)| idx)
    }

    fn has_content_before(&self, idx: usize) -> bool {
        self.current[..idx]
            .iter()
            .any(|piece| matches!(piece, Piece::Char(c) if *c != ' '))
    }

    /// Close the line at the space piece `idx`, dropping the space and
    /// carrying everything after it onto a new line.
    fn break_at_space(&mut self, idx: usize) {
        let rest = self.current.split_off(idx + 1);
        let _space = self.current.pop();
        self.content = self
            .current
            .iter()
            .filter_map(|piece| match piece {
                Piece::Char(c) => Some(*c),
                Piece::Markup(_) => None,
            })
            .collect();
        self.close_line(LineEnd::Inserted);
        for piece in rest {
            match piece {
                Piece::Markup(markup) => self.push_markup(markup),
                Piece::Char(c) => self.push_unchecked(c),
            }
        }
    }

    fn close_line(&mut self, end: LineEnd) {
        let mut text = String::new();
        for piece in self.current.drain(..) {
            match piece {
                Piece::Markup(markup) => text.push_str(markup),
                Piece::Char(c) => text.push(c),
            }
        }
        let content = std::mem::take(&mut self.content);

        if std::mem::take(&mut self.overflowing) {
            let width = self.measure(&content);
            if width > self.limit {
                self.warnings.push(WrapWarning::UnbreakableToken {
                    token: content.trim().to_string(),
                    width,
                    limit: self.limit,
                });
            }
        }

        self.lines.push(Line { text, content });
        self.last_end = Some(end);
        self.mid_word = false;
    }

    fn finish(mut self) -> BrokenText {
        // An inserted break right before end of input would leave an empty
        // trailing line; an explicit one is kept.
        let trailing_empty = self.current.is_empty() && self.last_end == Some(LineEnd::Inserted);
        if !trailing_empty {
            self.close_line(LineEnd::Inserted);
        }
        BrokenText {
            lines: self.lines,
            warnings: self.warnings,
        }
    }
}

/// Break a segment list into lines no wider than `limit`.
///
/// Markup segments are zero-width and stay with the content that follows
/// them. A markup segment equal to `config.break_marker` closes the current
/// line and is reproduced by [`BrokenText::join`].
#[must_use]
pub fn break_segments(
    segments: &[Segment<'_>],
    font: &FontDescriptor,
    limit: u32,
    metrics: &dyn FontMetrics,
    config: &WrapConfig,
) -> BrokenText {
    let mut state = LineBreakState::new(metrics, font, limit, config.lookaround);
    for segment in segments {
        match segment.kind {
            SegmentKind::Markup if segment.text == config.break_marker => {
                state.close_line(LineEnd::Explicit);
            }
            SegmentKind::Markup => state.push_markup(segment.text),
            SegmentKind::Content => {
                for c in segment.text.chars() {
                    state.push_char(c);
                }
            }
        }
    }
    state.finish()
}
