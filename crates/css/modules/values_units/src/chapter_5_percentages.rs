//! CSS Values & Units Level 3 — §5 Percentages
//! See <https://www.w3.org/TR/css-values-3/#percentages>

use crate::{ParseError, serialize_number};
use core::fmt;
use cssparser::{Parser, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

impl Percentage {
    /// Resolve the percentage against `base`.
    #[inline]
    pub fn of(self, base: f32) -> f32 {
        base * self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_number(self.0 * 100.0, formatter)?;
        formatter.write_str("%")
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser<'_, '_>) -> Result<Percentage, ParseError> {
    match input.next()? {
        Token::Percentage { unit_value, .. } => Ok(Percentage(*unit_value)),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a `<percentage>` that must not be negative.
///
/// # Errors
/// Returns `ParseError::InvalidValue` for negative percentages.
pub fn parse_non_negative_percentage(
    input: &mut Parser<'_, '_>,
) -> Result<Percentage, ParseError> {
    let percentage = parse_percentage(input)?;
    if percentage.0 < 0.0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(percentage)
}
