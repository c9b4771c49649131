//! litscan_diagnostics: Error reporting infrastructure for the literal scanners.
//!
//! Scanners never unwind on malformed input. Each failure is a [`ScanError`]
//! (what was expected, and where) that is folded into an [`ErrorSink`] under
//! the furthest-error-wins rule. Once a parse attempt is over, the surviving
//! error is turned into a [`Diagnostic`] carrying a stable code and message.

mod expected;

pub use expected::{ErrorSink, Expected, ScanError};

use litscan_core::text::{LineMap, TextRange};
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        })
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source range where this diagnostic occurred, if any.
    pub range: Option<TextRange>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            range: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Attach a source range.
    pub fn at(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Attach a file name.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// Render with a line/column location instead of a raw byte offset.
    pub fn render(&self, line_map: &LineMap) -> String {
        let mut out = String::new();
        if let Some(ref file) = self.file {
            out.push_str(file);
        }
        if let Some(range) = self.range {
            let lc = line_map.line_and_column_of(range.pos);
            out.push_str(&format!("({})", lc));
        }
        if !out.is_empty() {
            out.push_str(": ");
        }
        out.push_str(&format!(
            "{} LS{}: {}",
            self.category, self.code, self.message_text
        ));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(range) = self.range {
                write!(f, "({})", range.pos)?;
            }
            write!(f, ": ")?;
        } else if let Some(range) = self.range {
            write!(f, "{}: ", range.pos)?;
        }
        write!(f, "{} LS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Substitute `{0}`, `{1}`, ... in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replace(&format!("{{{}}}", i), arg)
        })
}

/// A collection of diagnostics accumulated across several parse attempts.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Literal errors (1000-1099)
    // ========================================================================
    pub const _0_EXPECTED_TO_CLOSE_LITERAL: DiagnosticMessage = diag!(1001, Error, "'{0}' expected to close literal.");
    pub const QUOTE_EXPECTED_ONE_OF_0: DiagnosticMessage = diag!(1002, Error, "Quote expected, one of '{0}'.");
    pub const STRING_DELIMITER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "String delimiter expected.");
    pub const REGEXP_DELIMITER_EXPECTED: DiagnosticMessage = diag!(1004, Error, "Regexp delimiter expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED_0: DiagnosticMessage = diag!(1005, Error, "Hexadecimal digit expected: {0}.");
    pub const NUMBER_EXPECTED: DiagnosticMessage = diag!(1006, Error, "Number expected.");
    pub const REPLACEMENT_DELIMITER_EXPECTED: DiagnosticMessage = diag!(1007, Error, "Regexp delimiter expected before replacement.");

    // ========================================================================
    // Driver warnings (1100-1199)
    // ========================================================================
    pub const NO_LITERALS_FOUND: DiagnosticMessage = diag!(1100, Warning, "No literals found in input.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("'{0}' expected to close literal.", &["\""]);
        assert_eq!(msg, "'\"' expected to close literal.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(&messages::NUMBER_EXPECTED, &[])
            .at(TextRange::empty(10))
            .in_file("input.txt");
        let display = format!("{}", diag);
        assert!(display.contains("input.txt(10)"));
        assert!(display.contains("LS1006"));
    }

    #[test]
    fn test_diagnostic_render_line_column() {
        let source = "\"ok\"\n  \"broken";
        let map = LineMap::new(source);
        let diag = Diagnostic::new(&messages::_0_EXPECTED_TO_CLOSE_LITERAL, &["\""])
            .at(TextRange::empty(source.len() as u32))
            .in_file("input.txt");
        assert_eq!(
            diag.render(&map),
            "input.txt(2,10): error LS1001: '\"' expected to close literal."
        );
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::NO_LITERALS_FOUND, &[]));
        assert!(!collection.has_errors());
        collection.add(Diagnostic::new(&messages::NUMBER_EXPECTED, &[]));
        assert!(collection.has_errors());
        assert_eq!(collection.len(), 2);
        let codes: Vec<u32> = collection.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![1100, 1006]);
    }
}
