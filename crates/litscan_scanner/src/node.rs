//! Literal nodes produced by the literal parsers.

use crate::segment::Segment;
use crate::state::ScanState;
use litscan_core::text::TextRange;
use litscan_diagnostics::ScanError;
use std::borrow::Cow;
use std::fmt;

/// Which parser produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Number,
    RegexpMatch,
    RegexpReplace,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::String => write!(f, "string"),
            LiteralKind::Number => write!(f, "number"),
            LiteralKind::RegexpMatch => write!(f, "regexp"),
            LiteralKind::RegexpReplace => write!(f, "replace"),
        }
    }
}

/// A numeric payload, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// The payload of a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue<'src> {
    /// Decoded text of a single-segment literal.
    Text(Cow<'src, str>),
    Number(Number),
    /// Pattern and replacement of a replace literal, in that order.
    Pair(Box<[LiteralNode<'src>; 2]>),
}

/// The output of one successful literal parse.
///
/// For delimited literals `range` covers the content between the delimiters
/// (for a replace literal, from the start of the pattern to the end of the
/// replacement); for numbers it covers the consumed characters.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNode<'src> {
    pub kind: LiteralKind,
    pub range: TextRange,
    pub value: LiteralValue<'src>,
}

impl<'src> LiteralNode<'src> {
    pub(crate) fn from_segment(kind: LiteralKind, segment: Segment<'src>) -> Self {
        Self {
            kind,
            range: TextRange::from_offsets(segment.start, segment.end),
            value: LiteralValue::Text(segment.text),
        }
    }

    pub(crate) fn number(range: TextRange, number: Number) -> Self {
        Self {
            kind: LiteralKind::Number,
            range,
            value: LiteralValue::Number(number),
        }
    }

    pub(crate) fn pair(pattern: LiteralNode<'src>, replacement: LiteralNode<'src>) -> Self {
        Self {
            kind: LiteralKind::RegexpReplace,
            range: pattern.range.cover(replacement.range),
            value: LiteralValue::Pair(Box::new([pattern, replacement])),
        }
    }

    /// Decoded text, for single-segment literals.
    pub fn token(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    pub fn number_value(&self) -> Option<Number> {
        match self.value {
            LiteralValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Pattern and replacement, for replace literals.
    pub fn children(&self) -> Option<(&LiteralNode<'src>, &LiteralNode<'src>)> {
        match &self.value {
            LiteralValue::Pair(pair) => Some((&pair[0], &pair[1])),
            _ => None,
        }
    }

    /// Whether the token text borrows the source directly.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.value, LiteralValue::Text(Cow::Borrowed(_)))
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> LiteralNode<'static> {
        let value = match self.value {
            LiteralValue::Text(text) => LiteralValue::Text(Cow::Owned(text.into_owned())),
            LiteralValue::Number(n) => LiteralValue::Number(n),
            LiteralValue::Pair(pair) => {
                let [pattern, replacement] = *pair;
                LiteralValue::Pair(Box::new([pattern.into_owned(), replacement.into_owned()]))
            }
        };
        LiteralNode {
            kind: self.kind,
            range: self.range,
            value,
        }
    }
}

impl fmt::Display for LiteralNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} ", self.kind, self.range)?;
        match &self.value {
            LiteralValue::Text(text) => write!(f, "{:?}", text),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Pair(pair) => {
                let (pattern, replacement) = (&pair[0], &pair[1]);
                write!(f, "{:?} -> {:?}", pattern.token().unwrap_or(""), replacement.token().unwrap_or(""))
            }
        }
    }
}

/// A leaf parser recognizing one kind of literal at the cursor.
///
/// On success the cursor sits just past the literal. On failure the error is
/// recorded in the state's sink and returned; see each parser for where it
/// leaves the cursor.
pub trait LiteralParser {
    /// Name used in traces.
    fn name(&self) -> &'static str;

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError>;
}

impl<P: LiteralParser + ?Sized> LiteralParser for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn parse<'src>(&self, state: &mut ScanState<'src>) -> Result<LiteralNode<'src>, ScanError> {
        (**self).parse(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Float(1e10).to_string(), "10000000000.0");
        assert_eq!(Number::Float(-3.14).to_string(), "-3.14");
    }

    #[test]
    fn test_pair_range_and_children() {
        let pattern = LiteralNode::from_segment(
            LiteralKind::RegexpMatch,
            Segment { text: Cow::Borrowed("foo"), start: 1, end: 4 },
        );
        let replacement = LiteralNode::from_segment(
            LiteralKind::RegexpMatch,
            Segment { text: Cow::Owned("bar".into()), start: 5, end: 8 },
        );
        let node = LiteralNode::pair(pattern, replacement);
        assert_eq!(node.range, TextRange::new(1, 8));
        let (p, r) = node.children().unwrap();
        assert_eq!(p.token(), Some("foo"));
        assert_eq!(r.token(), Some("bar"));
        assert!(node.token().is_none());
        assert_eq!(node.to_string(), "replace 1..8 \"foo\" -> \"bar\"");
    }

    #[test]
    fn test_into_owned() {
        let node = LiteralNode::from_segment(
            LiteralKind::String,
            Segment { text: Cow::Borrowed("abc"), start: 1, end: 4 },
        );
        assert!(node.is_borrowed());
        let owned = node.into_owned();
        assert!(!owned.is_borrowed());
        assert_eq!(owned.token(), Some("abc"));
    }
}
