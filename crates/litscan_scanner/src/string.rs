//! Single-segment string literals.

use crate::delimiters::{DelimiterRule, QuoteSet, UnicodeDelimiters};
use crate::escapes::EscapeTable;
use crate::node::{LiteralKind, LiteralNode, LiteralParser};
use crate::segment::scan_segment;
use crate::state::ScanState;
use litscan_diagnostics::ScanError;
use tracing::trace;

/// A quoted string literal.
///
/// The opener must be accepted by `rule`; the literal ends at the closer the
/// rule pairs it with. Escapes decode through `escapes`, plus `\uXXXX` and
/// an escaped closer.
///
/// On failure the cursor is left where the call found it.
#[derive(Debug, Clone)]
pub struct StringLit<D> {
    rule: D,
    escapes: EscapeTable,
}

impl<D: DelimiterRule> StringLit<D> {
    pub fn new(rule: D, escapes: EscapeTable) -> Self {
        Self { rule, escapes }
    }

    pub fn rule(&self) -> &D {
        &self.rule
    }

    pub fn escapes(&self) -> &EscapeTable {
        &self.escapes
    }
}

impl<D: DelimiterRule> LiteralParser for StringLit<D> {
    fn name(&self) -> &'static str {
        "string literal"
    }

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError> {
        let call_start = state.pos();
        state.skip_whitespace();
        let open_pos = state.pos();
        trace!(parser = self.name(), pos = open_pos, "scanning literal");

        let Some((opener, closer)) = state
            .peek_char()
            .and_then(|opener| self.rule.closer_for(opener).map(|closer| (opener, closer)))
        else {
            let err = state.error_here(self.rule.expected());
            state.set_pos(call_start);
            return Err(err);
        };

        // The scanner's own error always lies past the opener, so it is the
        // one that survives in the sink.
        match scan_segment(state.input(), open_pos + opener.len_utf8(), closer, &self.escapes) {
            Ok(segment) => {
                state.set_pos(segment.end + closer.len_utf8());
                Ok(LiteralNode::from_segment(LiteralKind::String, segment))
            }
            Err(err) => {
                let err = state.fail(err);
                state.set_pos(call_start);
                Err(err)
            }
        }
    }
}

/// String literal whose quotes come from `allowed_quotes`; each quote closes
/// with itself.
pub fn string_lit(allowed_quotes: &str) -> StringLit<QuoteSet> {
    StringLit::new(QuoteSet::new(allowed_quotes.to_string()), EscapeTable::DEFAULT)
}

/// String literal delimited by any paired quote or bracket, or by any
/// self-pairing punctuation character.
pub fn unicode_string_lit() -> StringLit<UnicodeDelimiters> {
    StringLit::new(UnicodeDelimiters, EscapeTable::DEFAULT)
}

/// String literal with a caller-chosen delimiter rule and escape table.
pub fn custom_string_lit<D: DelimiterRule>(rule: D, escapes: EscapeTable) -> StringLit<D> {
    StringLit::new(rule, escapes)
}
