//! Tag segmenter state machine.
//!
//! The scanner walks the input once, left to right, in one of two states.
//! Each character is fed to [`ScanState::transition`], which yields the next
//! state and what to do with the pending buffer. Buffers are tracked as byte
//! offsets into the input, so segments borrow instead of copying.

use strum_macros::Display;

use crate::segment::{Segment, SegmentKind};
use crate::{TAG_CLOSE, TAG_OPEN};

/// The segmenter state: inside or outside an inline tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScanState {
    /// Outside of a tag; characters accumulate into a content buffer.
    Content,
    /// Inside a tag; characters accumulate into a markup buffer.
    Markup,
}

/// The buffer action selected by a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Transition {
    /// Append the character to the active buffer.
    Append,
    /// Flush pending content, then start a markup buffer with this character.
    OpenTag,
    /// Append this character to the markup buffer, then flush it.
    CloseTag,
}

impl ScanState {
    /// Consume one character, returning the next state and buffer action.
    ///
    /// `<` only opens a tag outside of one and `>` only closes a tag inside
    /// one; every other combination appends to the active buffer.
    #[must_use]
    pub const fn transition(self, c: char) -> (Self, Transition) {
        match (self, c) {
            (Self::Content, TAG_OPEN) => (Self::Markup, Transition::OpenTag),
            (Self::Markup, TAG_CLOSE) => (Self::Content, Transition::CloseTag),
            (state, _) => (state, Transition::Append),
        }
    }

    /// The kind of segment a buffer accumulated in this state becomes.
    #[must_use]
    pub const fn segment_kind(self) -> SegmentKind {
        match self {
            Self::Content => SegmentKind::Content,
            Self::Markup => SegmentKind::Markup,
        }
    }
}

/// Single-pass tag segmenter over a borrowed input string.
#[derive(Debug)]
pub struct Segmenter<'a> {
    input: &'a str,
    state: ScanState,
    /// Byte offset where the pending buffer starts.
    buffer_start: usize,
    segments: Vec<Segment<'a>>,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            state: ScanState::Content,
            buffer_start: 0,
            segments: Vec::new(),
        }
    }

    /// Scan the whole input and return the ordered segment list.
    ///
    /// A tag left open at end of input is emitted as a trailing `Markup`
    /// segment rather than reported as an error.
    #[must_use]
    pub fn run(mut self) -> Vec<Segment<'a>> {
        for (pos, c) in self.input.char_indices() {
            let (next, transition) = self.state.transition(c);
            match transition {
                Transition::Append => {}
                Transition::OpenTag => {
                    self.flush(pos, SegmentKind::Content);
                    self.buffer_start = pos;
                }
                Transition::CloseTag => {
                    let end = pos + c.len_utf8();
                    self.flush(end, SegmentKind::Markup);
                    self.buffer_start = end;
                }
            }
            self.state = next;
        }

        let kind = self.state.segment_kind();
        self.flush(self.input.len(), kind);
        self.segments
    }

    /// Emit the pending buffer ending at `end`, skipping empty buffers.
    fn flush(&mut self, end: usize, kind: SegmentKind) {
        if end > self.buffer_start {
            self.segments.push(Segment {
                kind,
                text: &self.input[self.buffer_start..end],
            });
        }
    }
}

/// Split `text` into an ordered list of `Markup` and `Content` segments.
#[must_use]
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    Segmenter::new(text).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_opens_only_outside_tag() {
        assert_eq!(
            ScanState::Content.transition('<'),
            (ScanState::Markup, Transition::OpenTag)
        );
        assert_eq!(
            ScanState::Markup.transition('<'),
            (ScanState::Markup, Transition::Append)
        );
    }

    #[test]
    fn test_transition_closes_only_inside_tag() {
        assert_eq!(
            ScanState::Markup.transition('>'),
            (ScanState::Content, Transition::CloseTag)
        );
        assert_eq!(
            ScanState::Content.transition('>'),
            (ScanState::Content, Transition::Append)
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ScanState::Markup.to_string(), "Markup");
        assert_eq!(Transition::CloseTag.to_string(), "CloseTag");
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_adjacent_tags() {
        let segments = segment("<b><i>x</i></b>");
        let texts: Vec<&str> = segments.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["<b>", "<i>", "x", "</i>", "</b>"]);
    }
}
