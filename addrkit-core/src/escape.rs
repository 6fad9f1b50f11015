//! Escaping of arbitrary text for diagnostics.
//!
//! Error messages embed the caller's input verbatim, which may contain
//! control characters or invalid-looking bytes. [`escape`] renders such text
//! as a printable, single-line string.

use std::fmt::{self, Write};

/// Display adapter returned by [`escape`].
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(&'a str);

/// Wrap `s` so that formatting it produces a printable rendition.
///
/// C-style escapes are used for the usual control characters, backslash and
/// quotes. Printable ASCII passes through, and every other byte (including
/// each byte of a multi-byte UTF-8 sequence) becomes `\xNN`.
///
/// # Examples
///
/// ```
/// use addrkit_core::escape::escape;
///
/// assert_eq!(escape("a\"b\n").to_string(), "a\\\"b\\n");
/// assert_eq!(escape("\u{7f}").to_string(), "\\x7f");
/// ```
pub fn escape(s: &str) -> Escaped<'_> {
    Escaped(s)
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.as_bytes() {
            let next = match b {
                0x07 => 'a',
                0x08 => 'b',
                0x0c => 'f',
                b'\n' => 'n',
                b'\r' => 'r',
                b'\t' => 't',
                0x0b => 'v',
                b'\\' => '\\',
                b'\'' => '\'',
                b'"' => '"',
                b' '..=b'~' => {
                    f.write_char(char::from(b))?;
                    continue;
                }
                _ => {
                    write!(f, "\\x{b:02x}")?;
                    continue;
                }
            };
            f.write_char('\\')?;
            f.write_char(next)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_printable() {
        assert_eq!(escape("127.0.0.1:5075").to_string(), "127.0.0.1:5075");
        assert_eq!(escape("").to_string(), "");
    }

    #[test]
    fn test_escape_control_chars() {
        assert_eq!(
            escape("\u{7}\u{8}\u{c}\n\r\t\u{b}").to_string(),
            "\\a\\b\\f\\n\\r\\t\\v"
        );
        assert_eq!(escape("\0").to_string(), "\\x00");
        assert_eq!(escape("\u{1b}[0m").to_string(), "\\x1b[0m");
    }

    #[test]
    fn test_escape_quotes_and_backslash() {
        assert_eq!(escape(r#"'"\"#).to_string(), r#"\'\"\\"#);
    }

    #[test]
    fn test_escape_non_ascii() {
        // U+00E9 is 0xC3 0xA9 in UTF-8
        assert_eq!(escape("caf\u{e9}").to_string(), "caf\\xc3\\xa9");
    }
}
