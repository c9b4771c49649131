//! Character classification used by the literal scanners and the whitespace
//! policies.

pub const BACKSLASH: char = '\\';
pub const GREATER_THAN: char = '>';
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED
        || ch == CARRIAGE_RETURN
        || ch == LINE_SEPARATOR
        || ch == PARAGRAPH_SEPARATOR
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{0085}' // next line
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Whitespace in the ASCII-only sense: space, tab, newline, carriage return.
#[inline]
pub fn is_ascii_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Value of a single hex digit, or `None` if `ch` is not one.
#[inline]
pub fn hex_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks() {
        assert!(is_line_break('\n'));
        assert!(is_line_break('\u{2029}'));
        assert!(!is_line_break(' '));
    }

    #[test]
    fn test_single_line_whitespace() {
        assert!(is_white_space_single_line('\t'));
        assert!(is_white_space_single_line('\u{3000}'));
        assert!(!is_white_space_single_line('\n'));
        assert!(!is_white_space_single_line('a'));
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value('0'), Some(0));
        assert_eq!(hex_value('f'), Some(15));
        assert_eq!(hex_value('F'), Some(15));
        assert_eq!(hex_value('g'), None);
    }
}
