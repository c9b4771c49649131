//! Shared scan state: the source text, the cursor, and the error sink.

use litscan_core::char_codes::{is_ascii_blank, is_line_break, is_white_space_single_line};
use litscan_diagnostics::{ErrorSink, Expected, ScanError};
use tracing::debug;

/// Whitespace policy: given the source and an offset, return the offset of
/// the first non-skippable character.
pub type WhitespaceFn = fn(&str, usize) -> usize;

/// Skip nothing.
pub fn no_whitespace(_input: &str, pos: usize) -> usize {
    pos
}

/// Skip space, tab, newline and carriage return.
pub fn ascii_whitespace(input: &str, pos: usize) -> usize {
    let skipped = input.as_bytes()[pos..]
        .iter()
        .take_while(|&&b| is_ascii_blank(b))
        .count();
    pos + skipped
}

/// Skip every Unicode single-line space and line terminator.
pub fn unicode_whitespace(input: &str, pos: usize) -> usize {
    let mut end = pos;
    for ch in input[pos..].chars() {
        if !(is_white_space_single_line(ch) || is_line_break(ch)) {
            break;
        }
        end += ch.len_utf8();
    }
    end
}

/// The state one parse attempt threads through every literal parser.
///
/// Parse attempts over the same text must each own their `ScanState`; the
/// cursor and the furthest error are scoped to one attempt.
#[derive(Debug, Clone)]
pub struct ScanState<'src> {
    /// The source text being scanned.
    input: &'src str,
    /// Current byte offset into `input`.
    pos: usize,
    /// Furthest failure so far.
    error: ErrorSink,
    /// Invoked once at the start of each literal.
    whitespace: WhitespaceFn,
}

impl<'src> ScanState<'src> {
    /// Create a state at offset 0 that skips ASCII whitespace.
    pub fn new(input: &'src str) -> Self {
        Self::with_whitespace(input, ascii_whitespace)
    }

    pub fn with_whitespace(input: &'src str, whitespace: WhitespaceFn) -> Self {
        Self {
            input,
            pos: 0,
            error: ErrorSink::new(),
            whitespace,
        }
    }

    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor. Offsets past the end clamp to the end, and an offset
    /// inside a multi-byte character backs up to that character's start.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        let mut pos = pos.min(self.input.len());
        while !self.input.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Text from the cursor to the end of input.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The code point at the cursor.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Run the whitespace policy once.
    pub fn skip_whitespace(&mut self) {
        self.pos = (self.whitespace)(self.input, self.pos);
    }

    pub fn set_whitespace(&mut self, whitespace: WhitespaceFn) {
        self.whitespace = whitespace;
    }

    /// The furthest error recorded so far.
    pub fn error(&self) -> Option<&ScanError> {
        self.error.furthest()
    }

    pub fn error_sink(&self) -> &ErrorSink {
        &self.error
    }

    /// Take the furthest error, leaving the sink empty.
    pub fn take_error(&mut self) -> Option<ScanError> {
        self.error.take()
    }

    /// Record `expected` at the cursor.
    pub fn error_here(&mut self, expected: Expected) -> ScanError {
        self.fail(ScanError::new(expected, self.pos))
    }

    /// Record `expected` at `pos`.
    pub fn error_at(&mut self, expected: Expected, pos: usize) -> ScanError {
        self.fail(ScanError::new(expected, pos))
    }

    /// Record `error` under the furthest-wins rule and hand it back.
    pub fn fail(&mut self, error: ScanError) -> ScanError {
        let furthest = self.error.record(error.clone());
        debug!(%error, furthest, "literal scan failed");
        error
    }

    /// Look ahead: call `f`, then restore the cursor whatever happened.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let save_pos = self.pos;
        let result = f(self);
        self.pos = save_pos;
        result
    }

    /// Try scanning: call `f`, restoring the cursor if it fails.
    ///
    /// Errors recorded by `f` stay in the sink so a failed alternative still
    /// competes for the furthest error.
    pub fn try_scan<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        let save_pos = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = save_pos;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_policies() {
        let text = " \t\n\u{3000}x";
        assert_eq!(no_whitespace(text, 0), 0);
        assert_eq!(ascii_whitespace(text, 0), 3);
        assert_eq!(unicode_whitespace(text, 0), text.len() - 1);
        assert_eq!(ascii_whitespace(text, text.len()), text.len());
    }

    #[test]
    fn test_skip_whitespace_uses_policy() {
        let mut state = ScanState::new("  x");
        state.skip_whitespace();
        assert_eq!(state.pos(), 2);
        assert_eq!(state.peek_char(), Some('x'));

        let mut state = ScanState::with_whitespace("  x", no_whitespace);
        state.skip_whitespace();
        assert_eq!(state.pos(), 0);
    }

    #[test]
    fn test_error_here_keeps_furthest() {
        let mut state = ScanState::new("abcdef");
        state.set_pos(4);
        state.error_here(Expected::Number);
        state.set_pos(1);
        state.error_here(Expected::StringDelimiter);
        assert_eq!(state.error(), Some(&ScanError::new(Expected::Number, 4)));
    }

    #[test]
    fn test_set_pos_clamps_to_char_boundary() {
        let mut state = ScanState::new("aé b");
        state.set_pos(2);
        assert_eq!(state.pos(), 1);
        assert_eq!(state.peek_char(), Some('é'));

        state.set_pos(100);
        assert_eq!(state.pos(), state.input().len());
        assert!(state.is_eof());
        state.skip_whitespace();
        assert_eq!(state.remaining(), "");
    }

    #[test]
    fn test_look_ahead_restores() {
        let mut state = ScanState::new("abc");
        let ch = state.look_ahead(|s| {
            s.set_pos(2);
            s.peek_char()
        });
        assert_eq!(ch, Some('c'));
        assert_eq!(state.pos(), 0);
    }

    #[test]
    fn test_try_scan_restores_on_error_only() {
        let mut state = ScanState::new("abc");
        let failed: Result<(), ScanError> = state.try_scan(|s| {
            s.set_pos(2);
            Err(s.error_here(Expected::Number))
        });
        assert!(failed.is_err());
        assert_eq!(state.pos(), 0);
        assert_eq!(state.error().map(|e| e.pos), Some(2));

        let ok: Result<(), ScanError> = state.try_scan(|s| {
            s.set_pos(1);
            Ok(())
        });
        assert!(ok.is_ok());
        assert_eq!(state.pos(), 1);
    }
}
