//! Lenient parsing for text inputs

/// Trim a text input, `None` when nothing is left
#[must_use]
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse the leading base-10 integer of a text field.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit (`"12ms"` → 12). Returns `None` when no digit follows, or when the
/// value does not fit in `i64`.
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));

    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    s[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  pub1 "), Some("pub1"));
        assert_eq!(non_blank(" \t"), None);
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_leading_int("5000"), Some(5000));
        assert_eq!(parse_leading_int("  42 "), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_int("12ms"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
    }

    #[test]
    fn non_numeric_is_none() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("ms12"), None);
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
        assert_eq!(parse_leading_int("9223372036854775808"), None);
    }

    #[test]
    fn full_i64_range() {
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775807ms"), Some(i64::MAX));
    }
}
