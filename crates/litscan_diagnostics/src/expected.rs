//! Positioned expectations and the furthest-error sink.

use crate::{messages, Diagnostic, DiagnosticMessage};
use litscan_core::text::{text_pos, TextRange};
use std::fmt;

/// What a scanner expected to find when it failed.
///
/// `Display` yields the short human-readable label (`"`, `number`,
/// `[a-f0-9]{4}`, ...); [`Expected::message`] maps the kind onto a
/// diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// The closing delimiter of a segment.
    Closer(char),
    /// One of a fixed set of quote characters.
    Quotes(String),
    /// Any opener accepted by a string delimiter rule.
    StringDelimiter,
    /// Any opener accepted by a regexp delimiter rule.
    RegexpDelimiter,
    /// The fresh opener of the replacement segment of a replace literal.
    ReplacementDelimiter,
    /// Four hex digits after `\u`; the input ended first.
    HexDigits,
    /// A single hex digit inside a `\u` escape.
    HexDigit,
    /// A numeric literal.
    Number,
}

impl Expected {
    /// The diagnostic template for this expectation.
    pub fn message(&self) -> &'static DiagnosticMessage {
        match self {
            Expected::Closer(_) => &messages::_0_EXPECTED_TO_CLOSE_LITERAL,
            Expected::Quotes(_) => &messages::QUOTE_EXPECTED_ONE_OF_0,
            Expected::StringDelimiter => &messages::STRING_DELIMITER_EXPECTED,
            Expected::RegexpDelimiter => &messages::REGEXP_DELIMITER_EXPECTED,
            Expected::ReplacementDelimiter => &messages::REPLACEMENT_DELIMITER_EXPECTED,
            Expected::HexDigits | Expected::HexDigit => &messages::HEXADECIMAL_DIGIT_EXPECTED_0,
            Expected::Number => &messages::NUMBER_EXPECTED,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Closer(c) => write!(f, "{}", c),
            Expected::Quotes(set) => f.write_str(set),
            Expected::StringDelimiter => f.write_str("string delimiter"),
            Expected::RegexpDelimiter | Expected::ReplacementDelimiter => {
                f.write_str("regexp delimiter")
            }
            Expected::HexDigits => f.write_str("[a-f0-9]{4}"),
            Expected::HexDigit => f.write_str("[a-f0-9]"),
            Expected::Number => f.write_str("number"),
        }
    }
}

/// A failed expectation at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at offset {pos}")]
pub struct ScanError {
    pub expected: Expected,
    pub pos: usize,
}

impl ScanError {
    pub fn new(expected: Expected, pos: usize) -> Self {
        Self { expected, pos }
    }

    /// Convert into a diagnostic pointing at the failure offset.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = self.expected.to_string();
        Diagnostic::new(self.expected.message(), &[&label])
            .at(TextRange::empty(text_pos(self.pos)))
    }
}

/// Records the furthest failure observed during one parse attempt.
///
/// A failure at or beyond the current furthest position replaces it; an
/// earlier one is discarded. Ties go to the newer failure.
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    furthest: Option<ScanError>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `error` in. Returns whether it became the furthest error.
    pub fn record(&mut self, error: ScanError) -> bool {
        match self.furthest {
            Some(ref current) if error.pos < current.pos => false,
            _ => {
                self.furthest = Some(error);
                true
            }
        }
    }

    /// The furthest error so far.
    pub fn furthest(&self) -> Option<&ScanError> {
        self.furthest.as_ref()
    }

    /// Position of the furthest error, if any.
    pub fn pos(&self) -> Option<usize> {
        self.furthest.as_ref().map(|e| e.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.furthest.is_none()
    }

    /// Take the furthest error, leaving the sink empty.
    pub fn take(&mut self) -> Option<ScanError> {
        self.furthest.take()
    }

    /// The furthest error as a diagnostic.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        self.furthest.as_ref().map(ScanError::to_diagnostic)
    }
}
