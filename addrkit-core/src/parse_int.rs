//! Strict string to integer conversion.
//!
//! Unlike `str::parse`, [`parse_to`] accepts C-style base prefixes (`0x` for
//! hexadecimal, a leading `0` for octal) and surrounding whitespace, while
//! still rejecting any other trailing characters.

use thiserror::Error;

use crate::escape::escape;

/// Errors from [`parse_to`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoConvert {
    /// No digits found
    #[error("Invalid input : \"{0}\"")]
    Invalid(String),

    /// Value does not fit the target type
    #[error("Out of range : \"{0}\"")]
    OutOfRange(String),

    /// Non-whitespace characters after the number
    #[error("Extraneous characters after integer: \"{0}\"")]
    Extraneous(String),
}

impl NoConvert {
    fn invalid(s: &str) -> Self {
        Self::Invalid(escape(s).to_string())
    }

    fn out_of_range(s: &str) -> Self {
        Self::OutOfRange(escape(s).to_string())
    }

    fn extraneous(s: &str) -> Self {
        Self::Extraneous(escape(s).to_string())
    }
}

/// Types that [`parse_to`] can produce.
pub trait ParseTo: Sized {
    /// Parse `s` strictly.
    fn parse_to(s: &str) -> Result<Self, NoConvert>;
}

/// Parse `s` as `T`, accepting decimal, `0x` hex and `0` octal notation.
///
/// # Examples
///
/// ```
/// use addrkit_core::parse_int::parse_to;
///
/// assert_eq!(parse_to::<u64>("5075"), Ok(5075));
/// assert_eq!(parse_to::<u64>("0x13d3"), Ok(5075));
/// assert_eq!(parse_to::<u64>("011723 "), Ok(5075));
/// assert!(parse_to::<u64>("5075x").is_err());
/// ```
pub fn parse_to<T: ParseTo>(s: &str) -> Result<T, NoConvert> {
    T::parse_to(s)
}

/// `isspace()` in the C locale.
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parsed but unsigned magnitude plus sign.
struct Magnitude {
    negative: bool,
    value: u64,
}

fn parse_magnitude(s: &str, allow_negative: bool) -> Result<Magnitude, NoConvert> {
    let bytes = s.as_bytes();
    let mut idx = 0;

    while idx < bytes.len() && is_space(bytes[idx]) {
        idx += 1;
    }

    let mut negative = false;
    match bytes.get(idx) {
        Some(b'+') => idx += 1,
        Some(b'-') if allow_negative => {
            negative = true;
            idx += 1;
        }
        _ => {}
    }

    let rest = &bytes[idx..];
    let radix = match rest {
        [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => {
            idx += 2;
            16
        }
        [b'0', ..] => 8,
        _ => 10,
    };

    let start = idx;
    let mut value: u64 = 0;
    let mut overflow = false;
    while let Some(digit) = bytes.get(idx).and_then(|&b| char::from(b).to_digit(radix)) {
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => value = v,
            None => overflow = true,
        }
        idx += 1;
    }

    if idx == start {
        return Err(NoConvert::invalid(s));
    }
    if overflow {
        return Err(NoConvert::out_of_range(s));
    }

    while idx < bytes.len() && is_space(bytes[idx]) {
        idx += 1;
    }
    if idx < bytes.len() {
        return Err(NoConvert::extraneous(s));
    }

    Ok(Magnitude { negative, value })
}

impl ParseTo for u64 {
    fn parse_to(s: &str) -> Result<Self, NoConvert> {
        parse_magnitude(s, false).map(|m| m.value)
    }
}

impl ParseTo for i64 {
    fn parse_to(s: &str) -> Result<Self, NoConvert> {
        let Magnitude { negative, value } = parse_magnitude(s, true)?;
        if negative {
            0i64.checked_sub_unsigned(value)
                .ok_or_else(|| NoConvert::out_of_range(s))
        } else {
            Self::try_from(value).map_err(|_| NoConvert::out_of_range(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_to::<u64>("0"), Ok(0));
        assert_eq!(parse_to::<u64>("65535"), Ok(65535));
        assert_eq!(parse_to::<u64>("+42"), Ok(42));
        assert_eq!(parse_to::<u64>("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn test_parse_prefixed() {
        assert_eq!(parse_to::<u64>("0x10"), Ok(16));
        assert_eq!(parse_to::<u64>("0XfF"), Ok(255));
        assert_eq!(parse_to::<u64>("010"), Ok(8));
        assert_eq!(parse_to::<u64>("00"), Ok(0));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_to::<u64>("  12"), Ok(12));
        assert_eq!(parse_to::<u64>("12 \t\n"), Ok(12));
        assert_eq!(parse_to::<u64>(" 12 "), Ok(12));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_to::<u64>(""), Err(NoConvert::Invalid(_))));
        assert!(matches!(parse_to::<u64>("   "), Err(NoConvert::Invalid(_))));
        assert!(matches!(parse_to::<u64>("abc"), Err(NoConvert::Invalid(_))));
        assert!(matches!(parse_to::<u64>("-1"), Err(NoConvert::Invalid(_))));
    }

    #[test]
    fn test_parse_extraneous() {
        assert!(matches!(parse_to::<u64>("12x"), Err(NoConvert::Extraneous(_))));
        assert!(matches!(parse_to::<u64>("12 3"), Err(NoConvert::Extraneous(_))));
        // octal stops at the first non-octal digit
        assert!(matches!(parse_to::<u64>("09"), Err(NoConvert::Extraneous(_))));
        // "0x" without hex digits parses the zero and leaves the 'x'
        assert!(matches!(parse_to::<u64>("0x"), Err(NoConvert::Extraneous(_))));
        assert!(matches!(parse_to::<u64>("0xg"), Err(NoConvert::Extraneous(_))));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            parse_to::<u64>("18446744073709551616"),
            Err(NoConvert::OutOfRange(_))
        ));
        assert!(matches!(
            parse_to::<i64>("9223372036854775808"),
            Err(NoConvert::OutOfRange(_))
        ));
        assert!(matches!(
            parse_to::<i64>("-9223372036854775809"),
            Err(NoConvert::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_to::<i64>("-5"), Ok(-5));
        assert_eq!(parse_to::<i64>("-0x10"), Ok(-16));
        assert_eq!(parse_to::<i64>("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_to::<i64>("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_error_message_escapes_input() {
        let err = parse_to::<u64>("1\n2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Extraneous characters after integer: \"1\\n2\""
        );
    }
}
