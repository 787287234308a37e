//! Whitespace as browser form scripts see it.
//!
//! This is the ECMAScript WhiteSpace + LineTerminator set that `trim()` and
//! `\s` use. It differs from Unicode White_Space: U+FEFF is included and
//! U+0085 is not.

/// Whether `c` is whitespace for form input handling.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing form whitespace.
pub fn trim_form_whitespace(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

/// Length as form scripts report it, in UTF-16 code units.
pub fn form_length(s: &str) -> usize {
    s.encode_utf16().count()
}
