//! Inference of booleans, null and numbers from raw text.

use crate::Value;
use serde_json::Number;

/// Interpret a raw attribute value or text run.
///
/// `true`, `false` and `null` are matched ignoring ASCII case. Anything that
/// starts like a number (digit, `.`, `-` or `+`) is tried as a hexadecimal
/// integer (`0x` prefix), a float (if it contains `.`, `e` or `E`), or a
/// 64-bit integer. Everything else, including numbers that fail to parse or
/// overflow to infinity, stays a string.
pub fn coerce(s: &str) -> Value {
    if s.is_empty() {
        return Value::String(String::new());
    }
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    match parse_number(s) {
        Some(n) => Value::Number(n),
        None => Value::String(s.to_string()),
    }
}

fn parse_number(s: &str) -> Option<Number> {
    let first = s.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '.' | '-' | '+')) {
        return None;
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        // i64::from_str_radix would accept a sign after the prefix
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return i64::from_str_radix(hex, 16).ok().map(Number::from);
    }

    if s.contains(['.', 'e', 'E']) {
        // Rust accepts "inf" and "NaN" spellings that a sign could prefix
        if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return None;
        }
        let f: f64 = s.parse().ok()?;
        return Number::from_f64(f);
    }

    s.parse::<i64>().ok().map(Number::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::Number(Number::from(i))
    }

    fn float(f: f64) -> Value {
        Value::Number(Number::from_f64(f).unwrap())
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_booleans_and_null() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("TRUE"), Value::Bool(true));
        assert_eq!(coerce("False"), Value::Bool(false));
        assert_eq!(coerce("null"), Value::Null);
        assert_eq!(coerce("NULL"), Value::Null);
        assert_eq!(coerce("yes"), string("yes"));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("5"), int(5));
        assert_eq!(coerce("-12"), int(-12));
        assert_eq!(coerce("+7"), int(7));
        assert_eq!(coerce("007"), int(7));
        assert_eq!(coerce("0x1F"), int(31));
        assert_eq!(coerce("0X10"), int(16));
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("1.5"), float(1.5));
        assert_eq!(coerce("-0.25"), float(-0.25));
        assert_eq!(coerce(".5"), float(0.5));
        assert_eq!(coerce("1e3"), float(1000.0));
        assert_eq!(coerce("2.5E-1"), float(0.25));
    }

    #[test]
    fn test_strings_stay_strings() {
        assert_eq!(coerce(""), string(""));
        assert_eq!(coerce("abc"), string("abc"));
        assert_eq!(coerce("1.2.3"), string("1.2.3"));
        assert_eq!(coerce("12abc"), string("12abc"));
        assert_eq!(coerce("-"), string("-"));
        assert_eq!(coerce("-inf"), string("-inf"));
        assert_eq!(coerce("+NaN"), string("+NaN"));
        assert_eq!(coerce("0x-1"), string("0x-1"));
        assert_eq!(coerce("0xZZ"), string("0xZZ"));
        assert_eq!(coerce("1e999"), string("1e999"));
        assert_eq!(coerce("99999999999999999999"), string("99999999999999999999"));
        assert_eq!(coerce(" 5"), string(" 5"));
    }
}
