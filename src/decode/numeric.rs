//! Boolean and numeric literal parsing
//!
//! Integers: optional sign (signed kinds only), then a radix prefix
//! `0x` (16), `0b` (2), `0o` or a bare leading `0` (8), else decimal.
//! Underscores may separate digits, or follow a radix prefix directly.
//! Results are range-checked against the declared bit width.

use std::borrow::Cow;
use std::fmt;

use crate::schema::{FloatWidth, IntWidth};

/// Why a literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumError {
    /// Not a literal of the expected form
    Syntax,
    /// Well-formed but does not fit the declared width
    Range,
}

impl fmt::Display for NumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumError::Syntax => write!(f, "invalid syntax"),
            NumError::Range => write!(f, "value out of range"),
        }
    }
}

/// Parses a boolean literal
pub fn parse_bool(s: &str) -> Result<bool, NumError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(NumError::Syntax),
    }
}

/// Parses a signed integer literal of the given width
pub fn parse_int(s: &str, width: IntWidth) -> Result<i64, NumError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = parse_magnitude(digits)?;
    let limit = 1u64 << (width.bits() - 1);

    if negative {
        if magnitude > limit {
            return Err(NumError::Range);
        }
        Ok((-(magnitude as i128)) as i64)
    } else {
        if magnitude > limit - 1 {
            return Err(NumError::Range);
        }
        Ok(magnitude as i64)
    }
}

/// Parses an unsigned integer literal of the given width
pub fn parse_uint(s: &str, width: IntWidth) -> Result<u64, NumError> {
    let magnitude = parse_magnitude(s)?;
    let max = match width.bits() {
        64 => u64::MAX,
        bits => (1u64 << bits) - 1,
    };
    if magnitude > max {
        return Err(NumError::Range);
    }
    Ok(magnitude)
}

/// Parses a floating point literal, rounding to the declared width.
///
/// Accepts decimal literals, `inf`/`infinity`/`nan`, and hexadecimal
/// literals with a mandatory binary exponent (`0x1.8p3`).
pub fn parse_float(s: &str, width: FloatWidth) -> Result<f64, NumError> {
    if s.contains('_') && !underscores_ok(s) {
        return Err(NumError::Syntax);
    }

    let value = if is_hex_literal(s) {
        let v = parse_hex_float(s)?;
        match width {
            FloatWidth::W32 => f64::from(v as f32),
            FloatWidth::W64 => v,
        }
    } else {
        let cleaned: Cow<'_, str> = if s.contains('_') {
            Cow::Owned(s.replace('_', ""))
        } else {
            Cow::Borrowed(s)
        };
        match width {
            FloatWidth::W32 => cleaned.parse::<f32>().map(f64::from),
            FloatWidth::W64 => cleaned.parse::<f64>(),
        }
        .map_err(|_| NumError::Syntax)?
    };

    if value.is_infinite() && !is_infinity_literal(s) {
        return Err(NumError::Range);
    }
    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.trim_start_matches(['+', '-']).to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

fn is_hex_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.starts_with("0x") || unsigned.starts_with("0X")
}

/// `[sign] 0x mantissa p [sign] exponent`, underscores already validated
fn parse_hex_float(s: &str) -> Result<f64, NumError> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let body = &rest[2..];
    let (mantissa, exponent) = body.split_once(['p', 'P']).ok_or(NumError::Syntax)?;

    let mut bits: u64 = 0;
    let mut scale: i64 = 0;
    let mut saw_digit = false;
    let mut saw_dot = false;

    for c in mantissa.chars() {
        match c {
            '_' => continue,
            '.' if !saw_dot => saw_dot = true,
            _ => {
                let d = c.to_digit(16).ok_or(NumError::Syntax)?;
                saw_digit = true;
                if bits >> 60 == 0 {
                    bits = bits * 16 + u64::from(d);
                    if saw_dot {
                        scale -= 4;
                    }
                } else if !saw_dot {
                    // Digits past 60 bits of precision only shift the value
                    scale += 4;
                }
            }
        }
    }
    if !saw_digit {
        return Err(NumError::Syntax);
    }

    let (exp_negative, exp_digits) = match exponent.as_bytes().first() {
        Some(b'-') => (true, &exponent[1..]),
        Some(b'+') => (false, &exponent[1..]),
        _ => (false, exponent),
    };
    let mut exp: i64 = 0;
    let mut saw_exp_digit = false;
    for c in exp_digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(10).ok_or(NumError::Syntax)?;
        saw_exp_digit = true;
        exp = (exp * 10 + i64::from(d)).min(1 << 20);
    }
    if !saw_exp_digit {
        return Err(NumError::Syntax);
    }
    if exp_negative {
        exp = -exp;
    }

    let value = scale_by_pow2(bits as f64, exp + scale);
    Ok(if negative { -value } else { value })
}

/// `value * 2^exp` without overflowing the intermediate power
fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    while exp != 0 && value != 0.0 && value.is_finite() {
        let step = exp.clamp(-1000, 1000);
        value *= 2f64.powi(step as i32);
        exp -= step;
    }
    value
}

/// Underscores must sit between digits, or directly after a radix prefix
fn underscores_ok(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let bytes = s.as_bytes();

    let mut i = 0;
    let mut hex = false;
    // '^' start, '0' digit or prefix, '_' underscore, '!' anything else
    let mut saw = b'^';
    if bytes.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1] | 0x20, b'b' | b'o' | b'x') {
        i = 2;
        saw = b'0';
        hex = bytes[1] | 0x20 == b'x';
    }

    for &c in &bytes[i..] {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = b'0';
            continue;
        }
        if c == b'_' {
            if saw != b'0' {
                return false;
            }
            saw = b'_';
            continue;
        }
        if saw == b'_' {
            return false;
        }
        saw = b'!';
    }
    saw != b'_'
}

fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, s);
    }
    match bytes[1] {
        b'x' | b'X' => (16, &s[2..]),
        b'b' | b'B' => (2, &s[2..]),
        b'o' | b'O' => (8, &s[2..]),
        _ => (8, &s[1..]),
    }
}

fn parse_magnitude(s: &str) -> Result<u64, NumError> {
    if s.contains('_') && !underscores_ok(s) {
        return Err(NumError::Syntax);
    }
    let (radix, digits) = split_radix(s);

    let mut value: u64 = 0;
    let mut saw_digit = false;
    let mut overflow = false;

    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let d = c.to_digit(radix).ok_or(NumError::Syntax)?;
        saw_digit = true;
        match value.checked_mul(u64::from(radix)).and_then(|v| v.checked_add(u64::from(d))) {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if !saw_digit {
        return Err(NumError::Syntax);
    }
    if overflow {
        return Err(NumError::Range);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Ok(true), "{}", s);
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Ok(false), "{}", s);
        }
        for s in ["", "yes", "tRuE", " true", "2"] {
            assert_eq!(parse_bool(s), Err(NumError::Syntax), "{}", s);
        }
    }

    #[test]
    fn test_int_radix_prefixes() {
        assert_eq!(parse_int("42", IntWidth::W64), Ok(42));
        assert_eq!(parse_int("0x1F", IntWidth::W64), Ok(31));
        assert_eq!(parse_int("0X1f", IntWidth::W64), Ok(31));
        assert_eq!(parse_int("017", IntWidth::W64), Ok(15));
        assert_eq!(parse_int("0o17", IntWidth::W64), Ok(15));
        assert_eq!(parse_int("0b101", IntWidth::W64), Ok(5));
        assert_eq!(parse_int("-0x10", IntWidth::W64), Ok(-16));
        assert_eq!(parse_int("+7", IntWidth::W64), Ok(7));
        assert_eq!(parse_int("0", IntWidth::W64), Ok(0));
        assert_eq!(parse_int("00", IntWidth::W64), Ok(0));
    }

    #[test]
    fn test_int_width_limits() {
        assert_eq!(parse_int("127", IntWidth::W8), Ok(127));
        assert_eq!(parse_int("-128", IntWidth::W8), Ok(-128));
        assert_eq!(parse_int("128", IntWidth::W8), Err(NumError::Range));
        assert_eq!(parse_int("-129", IntWidth::W8), Err(NumError::Range));
        assert_eq!(parse_int("9223372036854775807", IntWidth::W64), Ok(i64::MAX));
        assert_eq!(parse_int("-9223372036854775808", IntWidth::W64), Ok(i64::MIN));
        assert_eq!(parse_int("9223372036854775808", IntWidth::W64), Err(NumError::Range));
        assert_eq!(parse_int("99999999999999999999999", IntWidth::W64), Err(NumError::Range));
    }

    #[test]
    fn test_int_syntax_errors() {
        for s in ["", "-", "abc", "1.5", " 1", "1 ", "09", "0x", "0xg", "--1", "0x+5"] {
            assert_eq!(parse_int(s, IntWidth::W64), Err(NumError::Syntax), "{:?}", s);
        }
    }

    #[test]
    fn test_underscores_after_prefix() {
        assert_eq!(parse_int("0x_ff", IntWidth::W64), Ok(255));
        assert_eq!(parse_int("0b1_0", IntWidth::W64), Ok(2));
        assert_eq!(parse_int("0x1__0", IntWidth::W64), Err(NumError::Syntax));
        assert_eq!(parse_int("0x10_", IntWidth::W64), Err(NumError::Syntax));
    }

    #[test]
    fn test_underscores_between_decimal_digits() {
        assert_eq!(parse_int("1_000", IntWidth::W64), Ok(1000));
        assert_eq!(parse_int("-1_000_000", IntWidth::W64), Ok(-1_000_000));
        assert_eq!(parse_uint("2_5_5", IntWidth::W8), Ok(255));
        assert_eq!(parse_int("0_17", IntWidth::W64), Ok(15));

        for s in ["_1", "1_", "1__0", "-_1", "_"] {
            assert_eq!(parse_int(s, IntWidth::W64), Err(NumError::Syntax), "{:?}", s);
        }
    }

    #[test]
    fn test_uint() {
        assert_eq!(parse_uint("255", IntWidth::W8), Ok(255));
        assert_eq!(parse_uint("256", IntWidth::W8), Err(NumError::Range));
        assert_eq!(parse_uint("0xFFFFFFFFFFFFFFFF", IntWidth::W64), Ok(u64::MAX));
        assert_eq!(parse_uint("-1", IntWidth::W64), Err(NumError::Syntax));
        assert_eq!(parse_uint("+1", IntWidth::W64), Err(NumError::Syntax));
    }

    #[test]
    fn test_float() {
        assert_eq!(parse_float("1.5", FloatWidth::W64), Ok(1.5));
        assert_eq!(parse_float("-2e3", FloatWidth::W64), Ok(-2000.0));
        assert_eq!(parse_float("0.1", FloatWidth::W32), Ok(f64::from(0.1f32)));
        assert_eq!(parse_float("inf", FloatWidth::W64), Ok(f64::INFINITY));
        assert_eq!(parse_float("-Infinity", FloatWidth::W32), Ok(f64::NEG_INFINITY));
        assert!(parse_float("NaN", FloatWidth::W64).unwrap().is_nan());
        assert_eq!(parse_float("1e40", FloatWidth::W32), Err(NumError::Range));
        assert_eq!(parse_float("1e400", FloatWidth::W64), Err(NumError::Range));
        assert_eq!(parse_float("1,5", FloatWidth::W64), Err(NumError::Syntax));
        assert_eq!(parse_float("", FloatWidth::W64), Err(NumError::Syntax));
    }

    #[test]
    fn test_float_underscores() {
        assert_eq!(parse_float("1_000.5", FloatWidth::W64), Ok(1000.5));
        assert_eq!(parse_float("1_0e1_0", FloatWidth::W64), Ok(1e11));

        for s in ["_1.5", "1_.5", "1._5", "1.5_", "1__0.5"] {
            assert_eq!(parse_float(s, FloatWidth::W64), Err(NumError::Syntax), "{:?}", s);
        }
    }

    #[test]
    fn test_hex_float() {
        assert_eq!(parse_float("0x1p-2", FloatWidth::W64), Ok(0.25));
        assert_eq!(parse_float("0x1.8p1", FloatWidth::W64), Ok(3.0));
        assert_eq!(parse_float("-0X_1P+4", FloatWidth::W64), Ok(-16.0));
        assert_eq!(parse_float("0x.8p0", FloatWidth::W32), Ok(0.5));
        assert_eq!(parse_float("0xffp0", FloatWidth::W64), Ok(255.0));
        assert_eq!(parse_float("0x1p1023", FloatWidth::W64), Ok(2f64.powi(1023)));
        assert_eq!(parse_float("0x1p-1074", FloatWidth::W64), Ok(f64::from_bits(1)));

        assert_eq!(parse_float("0x1p1024", FloatWidth::W64), Err(NumError::Range));
        assert_eq!(parse_float("0x1p128", FloatWidth::W32), Err(NumError::Range));

        // A hex mantissa needs a binary exponent.
        for s in ["0x1", "0x1.8", "0x1p", "0xp1", "0x1.8.8p1", "0x1pz"] {
            assert_eq!(parse_float(s, FloatWidth::W64), Err(NumError::Syntax), "{:?}", s);
        }
    }
}
