//! String-form parsers shared by the value readers.
//!
//! These never allocate a new `Value`; callers decide what to do with the
//! parsed result.

use num_bigint::BigInt;

/// Split an optional sign and radix prefix off a trimmed numeral.
fn split_numeral(s: &str) -> Option<(bool, u32, &str)> {
    let s = s.trim();
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        Some("0o") | Some("0O") => (8, &rest[2..]),
        Some("0b") | Some("0B") => (2, &rest[2..]),
        _ => (10, rest),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some((negative, radix, digits))
}

pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, radix, digits) = split_numeral(s)?;
    let magnitude = u64::from_str_radix(digits, radix).ok()? as i128;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

pub fn parse_bignum(s: &str) -> Option<BigInt> {
    let (negative, radix, digits) = split_numeral(s)?;
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn parse_double(s: &str) -> Option<f64> {
    if let Some(i) = parse_int(s) {
        return Some(i as f64);
    }
    let t = s.trim();
    if t.is_empty() || t.contains('_') {
        return None;
    }
    t.parse::<f64>().ok()
}

pub fn parse_boolean(s: &str) -> Option<bool> {
    let t = s.trim();
    match t.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => parse_double(t).map(|d| d != 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_with_prefixes_and_signs() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -7 "), Some(-7));
        assert_eq!(parse_int("+0x1F"), Some(31));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("-0b101"), Some(-5));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn ints_reject_garbage() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0x-5"), None);
        assert_eq!(parse_int("1_000"), None);
        assert_eq!(parse_int("9223372036854775808"), None);
    }

    #[test]
    fn bignums_exceed_i64() {
        let big = parse_bignum("123456789012345678901234567890").unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert_eq!(parse_bignum("-0x10").unwrap(), BigInt::from(-16));
        assert!(parse_bignum("12a").is_none());
    }

    #[test]
    fn doubles_accept_ints_and_specials() {
        assert_eq!(parse_double("1.5"), Some(1.5));
        assert_eq!(parse_double("0x10"), Some(16.0));
        assert_eq!(parse_double("1e3"), Some(1000.0));
        assert_eq!(parse_double("-Inf"), Some(f64::NEG_INFINITY));
        assert!(parse_double("NaN").unwrap().is_nan());
        assert_eq!(parse_double("abc"), None);
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_boolean("YES"), Some(true));
        assert_eq!(parse_boolean("off"), Some(false));
        assert_eq!(parse_boolean("0"), Some(false));
        assert_eq!(parse_boolean("2.5"), Some(true));
        assert_eq!(parse_boolean("maybe"), None);
    }
}
