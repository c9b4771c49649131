//! Single-letter escape codes.

use litscan_core::char_codes::BACKSLASH;
use std::borrow::Cow;

const DEFAULT_ESCAPES: &[(char, char)] = &[
    ('a', '\u{07}'),
    ('b', '\u{08}'),
    ('f', '\u{0C}'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\u{0B}'),
];

/// Maps an escape letter (the `n` in `\n`) to the character it produces.
///
/// `\u` and an escaped closer are handled by the segment scanner itself and
/// never consult the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeTable {
    pairs: Cow<'static, [(char, char)]>,
}

impl EscapeTable {
    /// `\a \b \f \n \r \t \v`.
    pub const DEFAULT: EscapeTable = EscapeTable {
        pairs: Cow::Borrowed(DEFAULT_ESCAPES),
    };

    /// A table with no escapes; only `\u` and the closer are special.
    pub const EMPTY: EscapeTable = EscapeTable {
        pairs: Cow::Borrowed(&[]),
    };

    pub fn new(pairs: impl Into<Vec<(char, char)>>) -> Self {
        Self {
            pairs: Cow::Owned(pairs.into()),
        }
    }

    /// The character produced by `\letter`.
    #[inline]
    pub fn get(&self, letter: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|(from, _)| *from == letter)
            .map(|&(_, to)| to)
    }

    /// The escape letter that produces `ch`, if any.
    pub fn letter_for(&self, ch: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|(_, to)| *to == ch)
            .map(|&(from, _)| from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for EscapeTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Re-escape a decoded value so that scanning it with `closer` and `escapes`
/// yields `value` again.
///
/// Table characters become `\letter` and the closer becomes `\closer`. A
/// backslash is written as-is, which round-trips only when it is not
/// followed by something the scanner would treat as an escape.
pub fn escape_segment(value: &str, closer: char, escapes: &EscapeTable) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == closer {
            out.push(BACKSLASH);
            out.push(closer);
        } else if let Some(letter) = escapes.letter_for(ch) {
            out.push(BACKSLASH);
            out.push(letter);
        } else {
            out.push(ch);
        }
    }
    out
}
