//! Hex input for the `raw` command.

/// Error type for hex parsing.
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    /// A trailing half byte is left over.
    #[error("invalid hex: odd number of digits")]
    OddLength,

    /// A character that is not a hex digit or an accepted separator.
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),

    /// Nothing but separators and prefixes.
    #[error("no bytes to send")]
    Empty,
}

/// Parse a hex string into bytes.
///
/// Whitespace, `:` separators and `0x` prefixes are ignored, so
/// `"10 00 00 00"`, `"0x10000000"` and `"10:00:00:00"` are equivalent.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, HexError> {
    let digits: String = s
        .split(|c: char| c.is_whitespace() || c == ':')
        .map(|tok| tok.strip_prefix("0x").or(tok.strip_prefix("0X")).unwrap_or(tok))
        .collect();

    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(bad));
    }
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    // All digits are ASCII from here on, so byte offsets are char offsets.
    Ok((0..digits.len())
        .step_by(2)
        .filter_map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        let expected = vec![0x10, 0x00, 0x00, 0x00];
        assert_eq!(parse_hex("10000000").unwrap(), expected);
        assert_eq!(parse_hex("10 00 00 00").unwrap(), expected);
        assert_eq!(parse_hex("0x10000000").unwrap(), expected);
        assert_eq!(parse_hex("10:00:00:00").unwrap(), expected);
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(parse_hex("aBcD").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_hex(""), Err(HexError::Empty)));
        assert!(matches!(parse_hex("  0x "), Err(HexError::Empty)));
        assert!(matches!(parse_hex("123"), Err(HexError::OddLength)));
        assert!(matches!(parse_hex("zz"), Err(HexError::InvalidDigit('z'))));
        assert!(matches!(parse_hex("+1"), Err(HexError::InvalidDigit('+'))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(HexError::InvalidDigit('g').to_string(), "invalid hex digit: 'g'");
        assert_eq!(HexError::OddLength.to_string(), "invalid hex: odd number of digits");
        assert_eq!(HexError::Empty.to_string(), "no bytes to send");
    }
}
