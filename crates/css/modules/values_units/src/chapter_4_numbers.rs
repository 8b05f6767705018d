//! CSS Values & Units Level 3 — §4 Numbers
//! See <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use core::fmt;
use cssparser::{Parser, Token};

/// Decimal places kept when serializing numbers.
const SERIALIZE_SCALE: f32 = 10_000.0;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_number(self.0, formatter)
    }
}

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser<'_, '_>) -> Result<Number, ParseError> {
    match input.next()? {
        Token::Number { value, .. } => Ok(Number(*value)),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a `<number>` that must not be negative.
///
/// # Errors
/// Returns `ParseError::InvalidValue` for negative numbers.
pub fn parse_non_negative_number(input: &mut Parser<'_, '_>) -> Result<Number, ParseError> {
    let number = parse_number(input)?;
    if number.0 < 0.0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(number)
}

/// Parse an `<integer>` (§4.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an integer.
pub fn parse_integer(input: &mut Parser<'_, '_>) -> Result<i32, ParseError> {
    Ok(input.expect_integer()?)
}

/// Write a number with at most four decimals and no trailing zeros.
///
/// # Errors
/// Propagates formatter errors.
pub fn serialize_number(value: f32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rounded = (value * SERIALIZE_SCALE).round() / SERIALIZE_SCALE;
    // Avoid printing "-0".
    if rounded == 0.0 {
        return formatter.write_str("0");
    }
    write!(formatter, "{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_trims_float_noise() {
        assert_eq!(Number(30.000_002).to_string(), "30");
        assert_eq!(Number(1.5).to_string(), "1.5");
        assert_eq!(Number(-0.0).to_string(), "0");
    }
}
