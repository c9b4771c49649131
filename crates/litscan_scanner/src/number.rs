//! Integer and floating-point literals.

use crate::node::{LiteralNode, LiteralParser, Number};
use crate::state::ScanState;
use litscan_core::char_codes::is_digit;
use litscan_core::text::TextRange;
use litscan_diagnostics::{Expected, ScanError};
use tracing::trace;

/// A signed decimal number: `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`.
///
/// A fraction or an exponent makes it a float, which must be finite;
/// otherwise it must fit in an `i64`. No escapes, no separators, no radix prefixes.
///
/// On failure the cursor is left where the call found it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberLit;

impl LiteralParser for NumberLit {
    fn name(&self) -> &'static str {
        "number literal"
    }

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError> {
        let call_start = state.pos();
        state.skip_whitespace();
        let start = state.pos();
        trace!(parser = self.name(), pos = start, "scanning literal");

        let scanned = scan_number(state.input().as_bytes(), start);
        let text = &state.input()[start..scanned.end];
        let value = if scanned.digits == 0 {
            None
        } else if scanned.is_float {
            // `f64::from_str` saturates to infinity where the value overflows.
            text.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Number::Float)
        } else {
            text.parse::<i64>().ok().map(Number::Int)
        };

        match value {
            Some(number) => {
                state.set_pos(scanned.end);
                Ok(LiteralNode::number(TextRange::from_offsets(start, scanned.end), number))
            }
            None => {
                let err = state.error_at(Expected::Number, start);
                state.set_pos(call_start);
                Err(err)
            }
        }
    }
}

/// Signed decimal integer or float literal.
pub fn number_lit() -> NumberLit {
    NumberLit
}

struct ScannedNumber {
    end: usize,
    digits: usize,
    is_float: bool,
}

fn scan_number(bytes: &[u8], start: usize) -> ScannedNumber {
    let mut end = start;
    let mut digits = 0;
    let mut is_float = false;

    let scan_digits = |end: &mut usize| {
        let run = bytes[*end..].iter().take_while(|&&b| is_digit(b)).count();
        *end += run;
        run
    };

    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    digits += scan_digits(&mut end);

    if bytes.get(end) == Some(&b'.') {
        is_float = true;
        end += 1;
        digits += scan_digits(&mut end);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        is_float = true;
        end += 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        digits += scan_digits(&mut end);
    }

    ScannedNumber { end, digits, is_float }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LiteralKind;

    fn parse(input: &str) -> Result<LiteralNode<'_>, ScanError> {
        NumberLit.parse(&mut ScanState::new(input))
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse("42").unwrap().number_value(), Some(Number::Int(42)));
        assert_eq!(parse("+5").unwrap().number_value(), Some(Number::Int(5)));
        assert_eq!(parse("-17").unwrap().number_value(), Some(Number::Int(-17)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse("-3.14").unwrap().number_value(), Some(Number::Float(-3.14)));
        assert_eq!(parse("1e10").unwrap().number_value(), Some(Number::Float(1e10)));
        assert_eq!(parse("2.5E-3").unwrap().number_value(), Some(Number::Float(2.5e-3)));
        assert_eq!(parse(".5").unwrap().number_value(), Some(Number::Float(0.5)));
        assert_eq!(parse("7.").unwrap().number_value(), Some(Number::Float(7.0)));
    }

    #[test]
    fn test_range_and_cursor() {
        let mut state = ScanState::new("  12.5xyz");
        let node = NumberLit.parse(&mut state).unwrap();
        assert_eq!(node.kind, LiteralKind::Number);
        assert_eq!(node.range, TextRange::new(2, 6));
        assert_eq!(state.pos(), 6);
    }

    #[test]
    fn test_bare_sign_and_dot() {
        for input in [".", "-", "+", "", "x"] {
            let mut state = ScanState::new(input);
            let err = NumberLit.parse(&mut state).unwrap_err();
            assert_eq!(err, ScanError::new(Expected::Number, 0), "input {:?}", input);
            assert_eq!(state.pos(), 0);
        }
    }

    #[test]
    fn test_dangling_exponent() {
        let mut state = ScanState::new(" 1e");
        let err = NumberLit.parse(&mut state).unwrap_err();
        assert_eq!(err, ScanError::new(Expected::Number, 1));
        assert_eq!(state.pos(), 0);
    }

    #[test]
    fn test_float_overflow() {
        for input in ["1e400", "-1e400"] {
            let mut state = ScanState::new(input);
            let err = NumberLit.parse(&mut state).unwrap_err();
            assert_eq!(err, ScanError::new(Expected::Number, 0), "input {:?}", input);
            assert_eq!(state.pos(), 0);
        }
        assert_eq!(parse("1e-400").unwrap().number_value(), Some(Number::Float(0.0)));
    }

    #[test]
    fn test_integer_overflow() {
        let err = parse("99999999999999999999").unwrap_err();
        assert_eq!(err.expected, Expected::Number);
    }
}
