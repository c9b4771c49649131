//! litscan_scanner: Literal scanners for recursive-descent grammars.
//!
//! Each parser recognizes one literal at the cursor of a [`ScanState`]:
//! - quoted strings with a fixed quote set or Unicode-paired delimiters
//! - signed integers and floats
//! - regexp match (`/re/`) and replace (`/re/repl/`, `(re)[repl]`) literals
//!
//! Delimited literals share one segment scanner. It decodes backslash
//! escapes, `\uXXXX` code points and escaped closers, and only allocates once
//! it meets the first escape.

mod delimiters;
mod escapes;
mod node;
mod number;
mod options;
mod regexp;
mod segment;
mod state;
mod string;

pub use delimiters::{is_punctuation, regexp_delimiter, DelimiterRule, FnDelimiters, QuoteSet, UnicodeDelimiters};
pub use escapes::{escape_segment, EscapeTable};
pub use node::{LiteralKind, LiteralNode, LiteralParser, LiteralValue, Number};
pub use number::{number_lit, NumberLit};
pub use options::LiteralOptions;
pub use regexp::{
    custom_regexp_match_lit, custom_regexp_replace_lit, unicode_regexp_match_lit,
    unicode_regexp_replace_lit, RegexpMatchLit, RegexpReplaceLit,
};
pub use segment::{scan_segment, Segment};
pub use state::{ascii_whitespace, no_whitespace, unicode_whitespace, ScanState, WhitespaceFn};
pub use string::{custom_string_lit, string_lit, unicode_string_lit, StringLit};

pub use litscan_diagnostics::{ErrorSink, Expected, ScanError};
