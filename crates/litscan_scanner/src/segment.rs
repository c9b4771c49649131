//! The segment scanner: the primitive every delimited literal is built on.
//!
//! A segment runs from a start offset up to an unescaped closer. While no
//! escape has been seen the token is a borrowed slice of the source; the
//! first escape copies the prefix into an owned buffer and decoding
//! continues there.

use crate::escapes::EscapeTable;
use litscan_core::char_codes::{hex_value, BACKSLASH, REPLACEMENT_CHARACTER};
use litscan_diagnostics::{Expected, ScanError};
use std::borrow::Cow;

/// One scanned segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'src> {
    /// Decoded text. Borrowed unless the segment contained an escape.
    pub text: Cow<'src, str>,
    /// Offset of the first content byte.
    pub start: usize,
    /// Offset of the closer (exclusive end of the content).
    pub end: usize,
}

impl Segment<'_> {
    /// Whether decoding required a copy of the source.
    pub fn is_owned(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

/// Scan from `start` up to the first unescaped `closer`.
///
/// Escapes:
/// - `\uXXXX` decodes exactly four hex digits as one code point;
/// - `\<closer>` yields the closer itself;
/// - `\<letter>` yields the table entry for `letter`;
/// - any other `\x` is kept verbatim, backslash included.
pub fn scan_segment<'src>(
    input: &'src str,
    start: usize,
    closer: char,
    escapes: &EscapeTable,
) -> Result<Segment<'src>, ScanError> {
    let bytes = input.as_bytes();
    let mut buf: Option<String> = None;
    let mut end = start;

    while end < input.len() {
        // Jump straight to the next byte that can matter.
        if closer.is_ascii() {
            match memchr::memchr2(b'\\', closer as u8, &bytes[end..]) {
                Some(skip) => {
                    if let Some(buf) = buf.as_mut() {
                        buf.push_str(&input[end..end + skip]);
                    }
                    end += skip;
                }
                None => break,
            }
        }

        let Some(current) = input[end..].chars().next() else {
            break;
        };
        let size = current.len_utf8();

        if current == BACKSLASH {
            let escape_pos = end + size;
            let Some(escaped) = input[escape_pos..].chars().next() else {
                // A dangling backslash reads as an unterminated literal.
                return Err(ScanError::new(Expected::Closer(closer), end));
            };
            let buf = buf.get_or_insert_with(|| input[start..end].to_string());
            let after = escape_pos + escaped.len_utf8();

            if escaped == 'u' {
                let (decoded, digits_end) = decode_hex4(input, after)?;
                buf.push(decoded);
                end = digits_end;
            } else {
                if escaped == closer {
                    buf.push(closer);
                } else if let Some(replacement) = escapes.get(escaped) {
                    buf.push(replacement);
                } else {
                    buf.push(BACKSLASH);
                    buf.push(escaped);
                }
                end = after;
            }
            continue;
        }

        if current == closer {
            let text = match buf {
                Some(owned) => Cow::Owned(owned),
                None => Cow::Borrowed(&input[start..end]),
            };
            return Ok(Segment { text, start, end });
        }

        if let Some(buf) = buf.as_mut() {
            buf.push(current);
        }
        end += size;
    }

    Err(ScanError::new(Expected::Closer(closer), input.len()))
}

/// Decode the four hex digits starting at `pos`.
///
/// Returns the decoded character and the offset just past the digits.
/// Surrogate values decode to U+FFFD.
fn decode_hex4(input: &str, pos: usize) -> Result<(char, usize), ScanError> {
    let mut value = 0u32;
    let mut cursor = pos;
    let mut chars = input[pos..].chars();
    for _ in 0..4 {
        let Some(ch) = chars.next() else {
            return Err(ScanError::new(Expected::HexDigits, cursor));
        };
        let Some(digit) = hex_value(ch) else {
            return Err(ScanError::new(Expected::HexDigit, cursor));
        };
        value = (value << 4) | digit;
        cursor += ch.len_utf8();
    }
    Ok((char::from_u32(value).unwrap_or(REPLACEMENT_CHARACTER), cursor))
}
