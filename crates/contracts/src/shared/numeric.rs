//! Lenient numeric coercion for values coming from the products API.
//!
//! The API stores price and quantity loosely: numbers, numeric strings, or
//! nothing at all. Parsing takes the longest numeric prefix of a string
//! (`"10.5 kg"` -> 10.5, `"3.9"` -> 3 as an integer) and falls back to zero
//! when no digits are present.

use serde_json::Value;

/// Parse the leading decimal number of `input`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Returns `None` when the prefix holds no digits.
pub fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut pos: usize| {
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading base-10 integer of `input`, ignoring leading whitespace.
///
/// Stops at the first non-digit, so `"3.9"` yields 3. Saturates instead of
/// overflowing.
pub fn parse_integer_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if count == 0 {
        return None;
    }
    let magnitude = rest[..count].bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Decimal value of an arbitrary JSON field, 0 when it is not numeric.
pub fn coerce_decimal(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_decimal_prefix(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Integer value of an arbitrary JSON field, 0 when it is not numeric.
pub fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
                .unwrap_or(0),
        },
        Value::String(s) => parse_integer_prefix(s).unwrap_or(0),
        _ => 0,
    }
}
