//! Item text escaping
//!
//! Every item must render as exactly one line. Items containing a
//! backslash, line feed or carriage return are written with `\\`, `\n` and
//! `\r` and marked by the escaped separator `-\ ` in place of `- `. Only
//! marked lines are unescaped, so plain lines (including messages typed by
//! hand) are read back verbatim.

use std::borrow::Cow;

/// Returns true if the item must be escaped to fit on one line
pub fn needs_escape(item: &str) -> bool {
    item.contains(['\\', '\n', '\r'])
}

pub fn escape_item(item: &str) -> Cow<'_, str> {
    if !needs_escape(item) {
        return Cow::Borrowed(item);
    }

    let mut out = String::with_capacity(item.len() + 8);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn unescape_item(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            // Unknown escape or trailing backslash
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(!needs_escape("Buy strings"));
        assert!(matches!(escape_item("Buy strings"), Cow::Borrowed(_)));
        assert!(matches!(unescape_item("Buy strings"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_line_breaks_and_backslashes() {
        assert!(needs_escape("C:\\new"));
        assert_eq!(escape_item("a\nb\r\\c"), "a\\nb\\r\\\\c");
        assert_eq!(unescape_item("a\\nb\\r\\\\c"), "a\nb\r\\c");
    }

    #[test]
    fn unknown_escapes_are_kept() {
        assert_eq!(unescape_item("C:\\temp\\x"), "C:\\temp\\x");
        assert_eq!(unescape_item("ends with \\"), "ends with \\");
    }

    #[test]
    fn escaped_literal_backslash_n() {
        let item = "literal \\n, not a newline";
        let escaped = escape_item(item);
        assert!(!escaped.contains('\n'));
        assert_eq!(unescape_item(&escaped), item);
    }
}
