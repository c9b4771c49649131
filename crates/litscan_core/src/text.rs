//! Text range types for source location tracking.
//!
//! Literal nodes and diagnostics both point back into the source text with
//! byte offsets; `LineMap` turns those offsets into line/column pairs when a
//! diagnostic is rendered for a human.

use crate::char_codes::{is_line_break, CARRIAGE_RETURN, LINE_FEED};
use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
///
/// Offsets are 32-bit: sources larger than 4 GiB are not addressable, and
/// [`text_pos`] pins anything past that to `TextPos::MAX`.
pub type TextPos = u32;

/// Convert a `usize` byte offset, saturating at `TextPos::MAX`.
#[inline]
pub fn text_pos(offset: usize) -> TextPos {
    TextPos::try_from(offset).unwrap_or(TextPos::MAX)
}

/// A text range with start and end positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= pos);
        Self { pos, end }
    }

    /// Create a range from `usize` offsets, as produced by string slicing.
    #[inline]
    pub fn from_offsets(pos: usize, end: usize) -> Self {
        Self::new(text_pos(pos), text_pos(end))
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// The length of this range in bytes.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Convert to a byte range, suitable for slicing the source text.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }

    /// Whether this range contains a position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// Return a new range covering both this range and the other.
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.pos, self.end)
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        TextRange::from_offsets(range.start, range.end)
    }
}

/// A zero-based line and column, as shown in diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    pub line: u32,
    /// Counted in characters, not bytes, from the start of the line.
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for LineAndColumn {
    /// Renders 1-based, the way editors count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line + 1, self.character + 1)
    }
}

/// Resolves byte offsets in one source text to lines and columns.
///
/// Every terminator the scanners treat as a line break starts a new line:
/// `\n`, `\r`, U+2028 and U+2029, with `\r\n` counted once.
#[derive(Debug, Clone)]
pub struct LineMap<'src> {
    text: &'src str,
    line_starts: Vec<TextPos>,
}

impl<'src> LineMap<'src> {
    pub fn new(text: &'src str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            if !is_line_break(ch) {
                continue;
            }
            if ch == CARRIAGE_RETURN {
                if let Some(&(_, LINE_FEED)) = chars.peek() {
                    chars.next();
                    line_starts.push(text_pos(i + 2));
                    continue;
                }
            }
            line_starts.push(text_pos(i + ch.len_utf8()));
        }
        Self { text, line_starts }
    }

    /// Zero-based line containing `pos`. Offsets past the end map to the
    /// last line.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        self.line_starts.partition_point(|&start| start <= pos) as u32 - 1
    }

    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line as usize] as usize;
        let end = (pos as usize).min(self.text.len());
        let character = self
            .text
            .get(line_start..end)
            .map_or(end.saturating_sub(line_start), |prefix| prefix.chars().count());
        LineAndColumn::new(line, text_pos(character))
    }
}
