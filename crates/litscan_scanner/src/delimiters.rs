//! Delimiter pairing: which code points may open a literal, and what closes it.
//!
//! Well-known quote and bracket pairs close with their partner. Any other
//! Unicode punctuation character (and `>`) closes with itself, so ad hoc
//! delimiters such as `/` or `!` work without a table entry.

use litscan_core::char_codes::GREATER_THAN;
use litscan_diagnostics::Expected;
use std::borrow::Cow;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Initial-quote / final-quote pairs (Pi/Pf).
const INITIAL_FINAL_QUOTES: &[(char, char)] = &[
    ('«', '»'), ('‘', '’'), ('“', '”'), ('‹', '›'), ('⸂', '⸃'), ('⸄', '⸅'), ('⸉', '⸊'),
    ('⸌', '⸍'), ('⸜', '⸝'), ('⸠', '⸡'),
];

/// Low-9 openers closed by a final quote (Ps/Pf).
const LOW_QUOTES: &[(char, char)] = &[('‚', '’'), ('„', '”')];

/// Open / close punctuation pairs (Ps/Pe).
const OPEN_CLOSE: &[(char, char)] = &[
    ('(', ')'), ('[', ']'), ('{', '}'), ('༺', '༻'), ('༼', '༽'), ('᚛', '᚜'), ('⁅', '⁆'),
    ('⁽', '⁾'), ('₍', '₎'), ('❨', '❩'), ('❪', '❫'), ('❬', '❭'), ('❮', '❯'), ('❰', '❱'),
    ('❲', '❳'), ('❴', '❵'), ('⟅', '⟆'), ('⟦', '⟧'), ('⟨', '⟩'), ('⟪', '⟫'), ('⦃', '⦄'),
    ('⦅', '⦆'), ('⦇', '⦈'), ('⦉', '⦊'), ('⦋', '⦌'), ('⦑', '⦒'), ('⦓', '⦔'), ('⦕', '⦖'),
    ('⦗', '⦘'), ('⧘', '⧙'), ('⧚', '⧛'), ('⧼', '⧽'), ('〈', '〉'), ('《', '》'),
    ('「', '」'), ('『', '』'), ('【', '】'), ('〔', '〕'), ('〖', '〗'), ('〘', '〙'),
    ('〚', '〛'), ('〝', '〞'), ('︗', '︘'), ('︵', '︶'), ('︷', '︸'), ('︹', '︺'),
    ('︻', '︼'), ('︽', '︾'), ('︿', '﹀'), ('﹁', '﹂'), ('﹃', '﹄'), ('﹇', '﹈'),
    ('﹙', '﹚'), ('﹛', '﹜'), ('﹝', '﹞'), ('（', '）'), ('［', '］'), ('｛', '｝'),
    ('｟', '｠'), ('｢', '｣'), ('⸨', '⸩'),
];

/// Math-symbol brackets (Sm/Sm).
const MATH_BRACKETS: &[(char, char)] = &[('<', '>')];

const PAIR_CLASSES: [&[(char, char)]; 4] =
    [INITIAL_FINAL_QUOTES, LOW_QUOTES, OPEN_CLOSE, MATH_BRACKETS];

/// Closer for `opener` under the Unicode pairing rules, or `None` when
/// `opener` cannot start a delimited literal.
pub fn regexp_delimiter(opener: char) -> Option<char> {
    for class in PAIR_CLASSES {
        if let Some(&(_, closer)) = class.iter().find(|(open, _)| *open == opener) {
            return Some(closer);
        }
    }
    if is_punctuation(opener) || opener == GREATER_THAN {
        return Some(opener);
    }
    None
}

/// Unicode general category P* (connector, dash, open, close, initial,
/// final, other).
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        // ASCII symbols such as `+`, `|`, `<` are not in category P.
        return ch.is_ascii_punctuation()
            && !matches!(ch, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    ch.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Decides which code points open a literal and what closes them.
pub trait DelimiterRule {
    /// The closer for `opener`, or `None` if `opener` is not a valid delimiter.
    fn closer_for(&self, opener: char) -> Option<char>;

    /// What to report when an opener is rejected.
    fn expected(&self) -> Expected;
}

/// A fixed set of quote characters; each one closes with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSet(Cow<'static, str>);

impl QuoteSet {
    pub fn new(quotes: impl Into<Cow<'static, str>>) -> Self {
        Self(quotes.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DelimiterRule for QuoteSet {
    fn closer_for(&self, opener: char) -> Option<char> {
        self.0.contains(opener).then_some(opener)
    }

    fn expected(&self) -> Expected {
        Expected::Quotes(self.0.to_string())
    }
}

/// Paired quotes and brackets plus self-closing punctuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeDelimiters;

impl DelimiterRule for UnicodeDelimiters {
    fn closer_for(&self, opener: char) -> Option<char> {
        regexp_delimiter(opener)
    }

    fn expected(&self) -> Expected {
        Expected::StringDelimiter
    }
}

/// Any caller-supplied predicate mapping an opener to its closer.
#[derive(Clone, Copy)]
pub struct FnDelimiters<F>(pub F);

impl<F> DelimiterRule for FnDelimiters<F>
where
    F: Fn(char) -> Option<char>,
{
    fn closer_for(&self, opener: char) -> Option<char> {
        (self.0)(opener)
    }

    fn expected(&self) -> Expected {
        Expected::StringDelimiter
    }
}

impl<D: DelimiterRule + ?Sized> DelimiterRule for &D {
    fn closer_for(&self, opener: char) -> Option<char> {
        (**self).closer_for(opener)
    }

    fn expected(&self) -> Expected {
        (**self).expected()
    }
}
