//! Size input resolution
//!
//! Layout code hands the engine either an already-numeric size or numeric
//! text (legacy callers pass strings like `"12.5"`). Resolution policy is
//! explicit and named:
//!
//! - **lenient**: coerce-don't-throw. Anything unparsable becomes `0.0`.
//!   This silently masks caller mistakes, but existing callers rely on it;
//!   it is the compatibility contract, not an accident.
//! - **strict**: reject with [`ParseSizeError`], for callers that would
//!   rather hear about the mistake.

use thiserror_no_std::Error;

/// A size argument: an already-numeric value or numeric text.
///
/// # Examples
///
/// ```
/// use scale_engine::input::SizeValue;
///
/// assert_eq!(SizeValue::from(12.5).resolve_lenient(), 12.5);
/// assert_eq!(SizeValue::from("12.5").resolve_lenient(), 12.5);
/// assert_eq!(SizeValue::from("garbage").resolve_lenient(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeValue<'a> {
    /// A numeric size
    Number(f32),
    /// Numeric text, parsed at resolution time
    Text(&'a str),
}

impl SizeValue<'_> {
    /// Lenient resolution: unparsable text and non-finite numbers coerce to
    /// `0.0`. Never fails.
    pub fn resolve_lenient(&self) -> f32 {
        match *self {
            SizeValue::Number(n) if n.is_nan() => 0.0,
            SizeValue::Number(n) => n,
            SizeValue::Text(s) => parse_lenient(s),
        }
    }

    /// Strict resolution: signals instead of coercing.
    ///
    /// # Errors
    ///
    /// - [`ParseSizeError::Empty`] for empty/whitespace-only text
    /// - [`ParseSizeError::Unparsable`] for text that is not wholly numeric
    /// - [`ParseSizeError::NonFinite`] for NaN/infinite values
    pub fn resolve_strict(&self) -> Result<f32, ParseSizeError> {
        match *self {
            SizeValue::Number(n) if !n.is_finite() => Err(ParseSizeError::NonFinite),
            SizeValue::Number(n) => Ok(n),
            SizeValue::Text(s) => parse_strict(s),
        }
    }
}

impl From<f32> for SizeValue<'static> {
    fn from(value: f32) -> Self {
        SizeValue::Number(value)
    }
}

impl From<i32> for SizeValue<'static> {
    fn from(value: i32) -> Self {
        SizeValue::Number(value as f32)
    }
}

impl From<u32> for SizeValue<'static> {
    fn from(value: u32) -> Self {
        SizeValue::Number(value as f32)
    }
}

impl<'a> From<&'a str> for SizeValue<'a> {
    fn from(value: &'a str) -> Self {
        SizeValue::Text(value)
    }
}

/// Errors from the strict size parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    /// The input was empty or whitespace-only.
    #[error("empty size value")]
    Empty,
    /// The input was not a number.
    #[error("size value is not numeric")]
    Unparsable,
    /// The value parsed but is NaN or infinite.
    #[error("size value is not finite")]
    NonFinite,
}

/// Parses the longest leading numeric prefix of `raw`, JavaScript
/// `parseFloat`-style; unparsable input yields `0.0`.
///
/// Leading whitespace is skipped, trailing garbage is ignored (`"12.5px"`
/// parses as `12.5`), and a malformed exponent is dropped rather than
/// invalidating the mantissa (`"3e"` parses as `3`). Textual `NaN` and
/// `Infinity` are treated as unparsable.
pub fn parse_lenient(raw: &str) -> f32 {
    numeric_prefix(raw)
        .and_then(|p| p.parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Parses the whole of `raw` as a finite number.
///
/// Unlike [`parse_lenient`], trailing garbage is an error.
///
/// # Errors
///
/// See [`ParseSizeError`].
pub fn parse_strict(raw: &str) -> Result<f32, ParseSizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseSizeError::Empty);
    }
    let value = trimmed
        .parse::<f32>()
        .map_err(|_| ParseSizeError::Unparsable)?;
    if !value.is_finite() {
        return Err(ParseSizeError::NonFinite);
    }
    Ok(value)
}

/// The longest leading substring that parses as a finite decimal float:
/// optional sign, digits with at most one dot, optional well-formed exponent.
// Cursor arithmetic is bounded by the input length; no overflow possible.
#[allow(clippy::arithmetic_side_effects)]
fn numeric_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    let mut cursor = 0usize;
    if matches!(at(cursor), Some(b'+') | Some(b'-')) {
        cursor += 1;
    }

    let mut mantissa_digits = 0usize;
    while at(cursor).is_some_and(|b| b.is_ascii_digit()) {
        cursor += 1;
        mantissa_digits += 1;
    }
    if at(cursor) == Some(b'.') {
        cursor += 1;
        while at(cursor).is_some_and(|b| b.is_ascii_digit()) {
            cursor += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    let mut end = cursor;
    if matches!(at(cursor), Some(b'e') | Some(b'E')) {
        let mut exp = cursor + 1;
        if matches!(at(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let digits_start = exp;
        while at(exp).is_some_and(|b| b.is_ascii_digit()) {
            exp += 1;
        }
        // Only consume a complete exponent; "3e" stays "3".
        if exp > digits_start {
            end = exp;
        }
    }

    s.get(..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_plain_numbers() {
        assert_eq!(parse_lenient("12"), 12.0);
        assert_eq!(parse_lenient("12.5"), 12.5);
        assert_eq!(parse_lenient("-4"), -4.0);
        assert_eq!(parse_lenient("+.5"), 0.5);
        assert_eq!(parse_lenient("3."), 3.0);
    }

    #[test]
    fn test_lenient_leading_whitespace() {
        assert_eq!(parse_lenient("  42"), 42.0);
        assert_eq!(parse_lenient("\t7.5"), 7.5);
    }

    #[test]
    fn test_lenient_trailing_garbage_ignored() {
        assert_eq!(parse_lenient("12.5px"), 12.5);
        assert_eq!(parse_lenient("100%"), 100.0);
        assert_eq!(parse_lenient("3e"), 3.0);
        assert_eq!(parse_lenient("3e+"), 3.0);
    }

    #[test]
    fn test_lenient_exponents() {
        assert_eq!(parse_lenient("3e2"), 300.0);
        assert_eq!(parse_lenient("1.5E-1"), 0.15);
        assert_eq!(parse_lenient("2e+1"), 20.0);
    }

    #[test]
    fn test_lenient_garbage_coerces_to_zero() {
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("+"), 0.0);
        assert_eq!(parse_lenient("px12"), 0.0);
        assert_eq!(parse_lenient("NaN"), 0.0);
        assert_eq!(parse_lenient("Infinity"), 0.0);
    }

    #[test]
    fn test_strict_accepts_whole_numbers_only() {
        assert_eq!(parse_strict("12.5"), Ok(12.5));
        assert_eq!(parse_strict(" 12.5 "), Ok(12.5));
        assert_eq!(parse_strict("12.5px"), Err(ParseSizeError::Unparsable));
        assert_eq!(parse_strict(""), Err(ParseSizeError::Empty));
        assert_eq!(parse_strict("   "), Err(ParseSizeError::Empty));
    }

    #[test]
    fn test_strict_rejects_non_finite() {
        assert_eq!(parse_strict("inf"), Err(ParseSizeError::NonFinite));
        assert_eq!(parse_strict("NaN"), Err(ParseSizeError::NonFinite));
    }

    #[test]
    fn test_size_value_lenient() {
        assert_eq!(SizeValue::from(3.5).resolve_lenient(), 3.5);
        assert_eq!(SizeValue::from(7).resolve_lenient(), 7.0);
        assert_eq!(SizeValue::from("abc").resolve_lenient(), 0.0);
        assert_eq!(SizeValue::Number(f32::NAN).resolve_lenient(), 0.0);
    }

    #[test]
    fn test_size_value_strict() {
        assert_eq!(SizeValue::from(3.5).resolve_strict(), Ok(3.5));
        assert_eq!(
            SizeValue::Number(f32::INFINITY).resolve_strict(),
            Err(ParseSizeError::NonFinite)
        );
        assert_eq!(
            SizeValue::from("abc").resolve_strict(),
            Err(ParseSizeError::Unparsable)
        );
    }

    #[test]
    fn test_negative_passes_through() {
        // Negative sizes are the caller's problem, not a parse failure.
        assert_eq!(parse_lenient("-50"), -50.0);
        assert_eq!(parse_strict("-50"), Ok(-50.0));
    }
}
