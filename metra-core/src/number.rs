//! Numeric literals
//!
//! Reading: a literal is an optional sign, digits, an optional fractional
//! part and an optional exponent. Either '.' or the locale's decimal
//! separator may introduce the fractional part. Digit grouping is not
//! accepted on input.
//!
//! Writing: values are rendered with a number of significant digits after
//! the radix, switching to scientific notation for very small and very
//! large magnitudes.

use thiserror::Error;
use crate::NumberFormat;

/// Error type for numeric literal handling
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Value is not finite: {0}")]
    NotFinite(f64),
}

/// Length in bytes of the numeric literal at the start of `s`.
///
/// Returns `None` when `s` does not start with a literal. An exponent
/// marker only belongs to the literal when digits follow it, so "5em"
/// scans as "5".
pub fn scan_literal(s: &str, format: &NumberFormat) -> Option<usize> {
    let bytes: Vec<(usize, char)> = s.char_indices().collect();
    let mut i = 0;

    if matches!(bytes.first(), Some((_, '+' | '-'))) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].1.is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && is_decimal_point(bytes[i].1, format) {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].1.is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if i < bytes.len() && matches!(bytes[i].1, 'e' | 'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j].1, '+' | '-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].1.is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(bytes.get(i).map(|(pos, _)| *pos).unwrap_or(s.len()))
}

fn is_decimal_point(c: char, format: &NumberFormat) -> bool {
    c == '.' || c == format.decimal_separator
}

/// Parse a complete numeric literal into a finite f64
pub fn parse_decimal(s: &str, format: &NumberFormat) -> Result<f64, NumberError> {
    let s = s.trim();
    match scan_literal(s, format) {
        Some(len) if len == s.len() => {}
        _ => return Err(NumberError::ParseError(s.to_string())),
    }

    let normalized: String = s
        .chars()
        .map(|c| if c == format.decimal_separator { '.' } else { c })
        .collect();

    let value: f64 = normalized
        .parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    if !value.is_finite() {
        return Err(NumberError::NotFinite(value));
    }
    Ok(value)
}

/// Most digits after the radix an f64 can carry; larger requests are clamped
pub const MAX_DIGITS: usize = 17;

/// Render a value with up to `digits` significant digits after the radix.
///
/// - zero: "0"
/// - below 1e-3: "1.23e-04"
/// - below 1: `digits` significant digits, "0.12"
/// - below 1e6: grouped fixed point, "1,234.57"
/// - otherwise: "1.23e+06"
pub fn format_value(value: f64, digits: usize, format: &NumberFormat) -> String {
    let digits = digits.min(MAX_DIGITS);
    let v = value.abs();

    let text = if value == 0.0 {
        "0".to_string()
    } else if v < 1e-3 {
        scientific(value, digits, false)
    } else if v < 1.0 {
        general(value, digits)
    } else if v < 1e6 {
        grouped(value, digits)
    } else {
        scientific(value, digits, true)
    };

    localize(&text, format)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn scientific(value: f64, digits: usize, always_sign: bool) -> String {
    let raw = format!("{:.*e}", digits, value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let sign = if exponent < 0 {
        "-"
    } else if always_sign {
        "+"
    } else {
        ""
    };
    format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
}

fn general(value: f64, digits: usize) -> String {
    let digits = digits.max(1) as i32;
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

const GROUP_MARK: char = '\u{1}';

fn grouped(value: f64, digits: usize) -> String {
    let fixed = format!("{:.*}", digits, value);
    let fixed = trim_fraction(&fixed);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(GROUP_MARK);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn localize(text: &str, format: &NumberFormat) -> String {
    text.chars()
        .map(|c| match c {
            '.' => format.decimal_separator,
            GROUP_MARK => format.group_separator,
            other => other,
        })
        .collect()
}
