//! Delimiter rule and escape table bundled for the customizable parsers.

use crate::delimiters::{DelimiterRule, UnicodeDelimiters};
use crate::escapes::EscapeTable;
use crate::regexp::{RegexpMatchLit, RegexpReplaceLit};
use crate::string::StringLit;

/// Options shared by the customizable literal parsers.
///
/// The default is the Unicode delimiter rule with the default escapes, which
/// is what [`unicode_string_lit`](crate::unicode_string_lit) and friends use.
#[derive(Debug, Clone, Default)]
pub struct LiteralOptions<D = UnicodeDelimiters> {
    pub rule: D,
    pub escapes: EscapeTable,
}

impl<D: DelimiterRule> LiteralOptions<D> {
    pub fn new(rule: D) -> Self {
        Self {
            rule,
            escapes: EscapeTable::DEFAULT,
        }
    }

    /// Replace the escape table.
    pub fn with_escapes(mut self, escapes: EscapeTable) -> Self {
        self.escapes = escapes;
        self
    }

    /// Swap the delimiter rule, keeping the escape table.
    pub fn with_rule<R: DelimiterRule>(self, rule: R) -> LiteralOptions<R> {
        LiteralOptions {
            rule,
            escapes: self.escapes,
        }
    }

    pub fn string_lit(self) -> StringLit<D> {
        StringLit::new(self.rule, self.escapes)
    }

    pub fn regexp_match_lit(self) -> RegexpMatchLit<D> {
        RegexpMatchLit::new(self.rule, self.escapes)
    }

    pub fn regexp_replace_lit(self) -> RegexpReplaceLit<D> {
        RegexpReplaceLit::new(self.rule, self.escapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiters::QuoteSet;
    use crate::node::LiteralParser;
    use crate::state::ScanState;

    #[test]
    fn test_default_options_are_unicode() {
        let parser = <LiteralOptions>::default().string_lit();
        let mut state = ScanState::new("«a\\tb»");
        assert_eq!(parser.parse(&mut state).unwrap().token(), Some("a\tb"));
    }

    #[test]
    fn test_custom_rule_and_escapes() {
        let parser = LiteralOptions::new(UnicodeDelimiters)
            .with_rule(QuoteSet::new("'"))
            .with_escapes(EscapeTable::EMPTY)
            .string_lit();
        let mut state = ScanState::new(r"'a\tb'");
        assert_eq!(parser.parse(&mut state).unwrap().token(), Some("a\\tb"));
        assert!(parser.parse(&mut ScanState::new("\"x\"")).is_err());
    }

    #[test]
    fn test_regexp_parsers_from_options() {
        let options = LiteralOptions::new(QuoteSet::new("#"));
        let mut state = ScanState::new("#a#b#");
        let node = options.regexp_replace_lit().parse(&mut state).unwrap();
        let (pattern, replacement) = node.children().unwrap();
        assert_eq!(pattern.token(), Some("a"));
        assert_eq!(replacement.token(), Some("b"));
    }
}
