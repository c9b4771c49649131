//! Regexp match (`/pattern/`) and replace (`/pattern/replacement/`) literals.
//!
//! Only the delimiting is handled here. The pattern text is not validated
//! as a regular expression.

use crate::delimiters::{regexp_delimiter, DelimiterRule, UnicodeDelimiters};
use crate::escapes::EscapeTable;
use crate::node::{LiteralKind, LiteralNode, LiteralParser};
use crate::segment::scan_segment;
use crate::state::ScanState;
use litscan_diagnostics::{Expected, ScanError};
use tracing::trace;

/// A one-segment regexp literal.
///
/// Same shape as a string literal with a Unicode delimiter rule, reported
/// as a regexp delimiter in diagnostics. On failure the cursor is left
/// where the call found it.
#[derive(Debug, Clone)]
pub struct RegexpMatchLit<D> {
    rule: D,
    escapes: EscapeTable,
}

impl<D: DelimiterRule> RegexpMatchLit<D> {
    pub fn new(rule: D, escapes: EscapeTable) -> Self {
        Self { rule, escapes }
    }
}

impl<D: DelimiterRule> LiteralParser for RegexpMatchLit<D> {
    fn name(&self) -> &'static str {
        "regexp match literal"
    }

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError> {
        let call_start = state.pos();
        state.skip_whitespace();
        let open_pos = state.pos();
        trace!(parser = self.name(), pos = open_pos, "scanning literal");

        let Some((opener, closer)) = open(state, &self.rule) else {
            let err = state.error_here(Expected::RegexpDelimiter);
            state.set_pos(call_start);
            return Err(err);
        };

        match scan_segment(state.input(), open_pos + opener.len_utf8(), closer, &self.escapes) {
            Ok(segment) => {
                state.set_pos(segment.end + closer.len_utf8());
                Ok(LiteralNode::from_segment(LiteralKind::RegexpMatch, segment))
            }
            Err(err) => {
                let err = state.fail(err);
                state.set_pos(call_start);
                Err(err)
            }
        }
    }
}

/// A two-segment regexp literal: pattern, then replacement.
///
/// With a symmetric delimiter the pattern's closer also opens the
/// replacement (`/foo/bar/`). With a paired delimiter a fresh opener must
/// follow the pattern (`(foo)[bar]`); it is validated by the Unicode rules
/// whatever `rule` is. The replacement always decodes with the default
/// escape table.
///
/// A failure after the first opener leaves the cursor where scanning
/// stopped, so the caller can see how far the literal got.
#[derive(Debug, Clone)]
pub struct RegexpReplaceLit<D> {
    rule: D,
    escapes: EscapeTable,
}

impl<D: DelimiterRule> RegexpReplaceLit<D> {
    pub fn new(rule: D, escapes: EscapeTable) -> Self {
        Self { rule, escapes }
    }
}

impl<D: DelimiterRule> LiteralParser for RegexpReplaceLit<D> {
    fn name(&self) -> &'static str {
        "regexp replace literal"
    }

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError> {
        let call_start = state.pos();
        state.skip_whitespace();
        trace!(parser = self.name(), pos = state.pos(), "scanning literal");

        let Some((opener, closer)) = open(state, &self.rule) else {
            let err = state.error_here(Expected::RegexpDelimiter);
            state.set_pos(call_start);
            return Err(err);
        };
        state.set_pos(state.pos() + opener.len_utf8());

        let pattern = scan_segment(state.input(), state.pos(), closer, &self.escapes)
            .map_err(|err| state.fail(err))?;
        state.set_pos(pattern.end + closer.len_utf8());

        let mut closer = closer;
        if closer != opener {
            // The second opener is consumed even when rejected; the error
            // lands just past it.
            let second = state.peek_char();
            if let Some(ch) = second {
                state.set_pos(state.pos() + ch.len_utf8());
            }
            closer = match second.and_then(regexp_delimiter) {
                Some(second_closer) => second_closer,
                None => return Err(state.error_here(Expected::ReplacementDelimiter)),
            };
        }

        let replacement = scan_segment(state.input(), state.pos(), closer, &EscapeTable::DEFAULT)
            .map_err(|err| state.fail(err))?;
        state.set_pos(replacement.end + closer.len_utf8());

        Ok(LiteralNode::pair(
            LiteralNode::from_segment(LiteralKind::RegexpMatch, pattern),
            LiteralNode::from_segment(LiteralKind::RegexpMatch, replacement),
        ))
    }
}

/// Validate the opener at the cursor without consuming it.
fn open<D: DelimiterRule>(state: &ScanState<'_>, rule: &D) -> Option<(char, char)> {
    let opener = state.peek_char()?;
    rule.closer_for(opener).map(|closer| (opener, closer))
}

/// Regexp match literal delimited by any paired quote or bracket, or by any
/// self-pairing punctuation character.
pub fn unicode_regexp_match_lit() -> RegexpMatchLit<UnicodeDelimiters> {
    RegexpMatchLit::new(UnicodeDelimiters, EscapeTable::DEFAULT)
}

/// Regexp match literal with a caller-chosen delimiter rule and escape table.
pub fn custom_regexp_match_lit<D: DelimiterRule>(rule: D, escapes: EscapeTable) -> RegexpMatchLit<D> {
    RegexpMatchLit::new(rule, escapes)
}

/// Regexp replace literal, `/re/repl/` or `(re)[repl]`, with Unicode
/// delimiters and the default escapes.
pub fn unicode_regexp_replace_lit() -> RegexpReplaceLit<UnicodeDelimiters> {
    RegexpReplaceLit::new(UnicodeDelimiters, EscapeTable::DEFAULT)
}

/// Regexp replace literal with a caller-chosen rule and escape table for
/// the pattern. The replacement still decodes with the default escapes.
pub fn custom_regexp_replace_lit<D: DelimiterRule>(
    rule: D,
    escapes: EscapeTable,
) -> RegexpReplaceLit<D> {
    RegexpReplaceLit::new(rule, escapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiters::FnDelimiters;
    use litscan_core::text::TextRange;
    use pretty_assertions::assert_eq;

    fn replace(input: &str) -> (Result<LiteralNode<'_>, ScanError>, usize) {
        let mut state = ScanState::new(input);
        let result = unicode_regexp_replace_lit().parse(&mut state);
        (result, state.pos())
    }

    fn segments<'a>(node: &'a LiteralNode<'_>) -> (&'a str, &'a str) {
        let (pattern, replacement) = node.children().unwrap();
        (pattern.token().unwrap(), replacement.token().unwrap())
    }

    #[test]
    fn test_match_literal() {
        let mut state = ScanState::new(" /a+b/ rest");
        let node = unicode_regexp_match_lit().parse(&mut state).unwrap();
        assert_eq!(node.kind, LiteralKind::RegexpMatch);
        assert_eq!(node.token(), Some("a+b"));
        assert_eq!(node.range, TextRange::new(2, 5));
        assert_eq!(state.pos(), 6);
    }

    #[test]
    fn test_match_literal_bad_delimiter() {
        let mut state = ScanState::new("abc");
        let err = unicode_regexp_match_lit().parse(&mut state).unwrap_err();
        assert_eq!(err, ScanError::new(Expected::RegexpDelimiter, 0));
    }

    #[test]
    fn test_match_literal_unterminated() {
        let mut state = ScanState::new("{abc");
        let err = unicode_regexp_match_lit().parse(&mut state).unwrap_err();
        assert_eq!(err, ScanError::new(Expected::Closer('}'), 4));
        assert_eq!(state.pos(), 0);
    }

    #[test]
    fn test_replace_symmetric() {
        let (result, pos) = replace("/foo/bar/");
        let node = result.unwrap();
        assert_eq!(node.kind, LiteralKind::RegexpReplace);
        assert_eq!(segments(&node), ("foo", "bar"));
        assert_eq!(node.range, TextRange::new(1, 8));
        assert_eq!(pos, 9);
    }

    #[test]
    fn test_replace_asymmetric() {
        let (result, pos) = replace("(foo)[bar]");
        let node = result.unwrap();
        assert_eq!(segments(&node), ("foo", "bar"));
        assert_eq!(pos, 10);
    }

    #[test]
    fn test_replace_asymmetric_symmetric_second() {
        let (result, _) = replace("<a.c>!x!");
        assert_eq!(segments(&result.unwrap()), ("a.c", "x"));
    }

    #[test]
    fn test_replace_rejects_second_opener() {
        let (result, pos) = replace("(foo)bar");
        assert_eq!(result.unwrap_err(), ScanError::new(Expected::ReplacementDelimiter, 6));
        assert_eq!(pos, 6);
    }

    #[test]
    fn test_replace_rejects_multibyte_second_opener() {
        let (result, pos) = replace("(a)éb]");
        assert_eq!(result.unwrap_err(), ScanError::new(Expected::ReplacementDelimiter, 5));
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_replace_missing_second_opener() {
        let (result, pos) = replace("(foo)");
        assert_eq!(result.unwrap_err(), ScanError::new(Expected::ReplacementDelimiter, 5));
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_replace_unterminated_pattern() {
        let (result, pos) = replace("/foo");
        assert_eq!(result.unwrap_err(), ScanError::new(Expected::Closer('/'), 4));
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_replace_unterminated_replacement() {
        let (result, pos) = replace("/foo/bar");
        assert_eq!(result.unwrap_err(), ScanError::new(Expected::Closer('/'), 8));
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_replace_escapes() {
        let (result, _) = replace(r"/a\/b/c\td\//");
        assert_eq!(segments(&result.unwrap()), ("a/b", "c\td/"));
    }

    #[test]
    fn test_replacement_uses_default_escapes() {
        let parser = custom_regexp_replace_lit(
            FnDelimiters(|c: char| (c == '#').then_some('#')),
            EscapeTable::EMPTY,
        );
        let mut state = ScanState::new(r"#a\nb#c\nd#");
        let node = parser.parse(&mut state).unwrap();
        assert_eq!(segments(&node), ("a\\nb", "c\nd"));
    }
}
