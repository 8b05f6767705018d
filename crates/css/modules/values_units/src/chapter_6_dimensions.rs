//! CSS Values & Units Level 3 — §6 Dimensions (Lengths subset)
//! See <https://www.w3.org/TR/css-values-3/#lengths>

use crate::{ParseError, serialize_number};
use core::fmt;
use cssparser::{Parser, Token};

/// Units accepted for a CSS 2.1 `<length>`.
///
/// `ComputedPx` marks a value that came out of `Length::compute`; it serializes as
/// `px` but is never produced by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Inches,
    Points,
    Picas,
    Pixels,
    Ems,
    Exs,
    ComputedPx,
}

impl LengthUnit {
    /// Unit suffix used when serializing.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Inches => "in",
            Self::Points => "pt",
            Self::Picas => "pc",
            Self::Pixels | Self::ComputedPx => "px",
            Self::Ems => "em",
            Self::Exs => "ex",
        }
    }

    /// Whether the unit depends on the element's font.
    pub const fn is_font_relative(self) -> bool {
        matches!(self, Self::Ems | Self::Exs)
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "mm" => Self::Millimeters,
            "cm" => Self::Centimeters,
            "in" => Self::Inches,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            "px" => Self::Pixels,
            "em" => Self::Ems,
            "ex" => Self::Exs,
            _ => return None,
        };
        Some(unit)
    }
}

/// Font metrics an element's relative lengths are resolved against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontContext {
    /// Size of 1em in pixels.
    pub em_size: f32,
    /// Size of 1ex in pixels.
    pub ex_size: f32,
}

impl FontContext {
    /// Context with `ex` derived as half an `em`.
    pub fn from_em(em_size: f32) -> Self {
        Self {
            em_size,
            ex_size: em_size * 0.5,
        }
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    /// A zero length.
    pub const fn zero() -> Self {
        Self::px(0.0)
    }

    /// A specified pixel length.
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }

    /// A length already resolved to pixels.
    pub const fn computed(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::ComputedPx,
        }
    }

    /// Resolve `em`/`ex` against the element font; every other unit passes through.
    pub fn compute(self, font: FontContext) -> Self {
        match self.unit {
            LengthUnit::Ems => Self::computed(self.value * font.em_size),
            LengthUnit::Exs => Self::computed(self.value * font.ex_size),
            LengthUnit::Millimeters
            | LengthUnit::Centimeters
            | LengthUnit::Inches
            | LengthUnit::Points
            | LengthUnit::Picas
            | LengthUnit::Pixels
            | LengthUnit::ComputedPx => self,
        }
    }

    /// Negated copy, used by relative-position resolution.
    pub fn negated(self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0.0 {
            return formatter.write_str("0");
        }
        serialize_number(self.value, formatter)?;
        formatter.write_str(self.unit.suffix())
    }
}

/// Parse a CSS <length>. Accepts the CSS 2.1 units and a unitless zero.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser<'_, '_>) -> Result<Length, ParseError> {
    match input.next()? {
        Token::Dimension { value, unit, .. } => {
            let unit_kind = LengthUnit::from_suffix(unit).ok_or(ParseError::UnexpectedToken)?;
            Ok(Length {
                value: *value,
                unit: unit_kind,
            })
        }
        Token::Number { value, .. } if *value == 0.0 => Ok(Length::zero()),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a `<length>` that must not be negative.
///
/// # Errors
/// Returns `ParseError::InvalidValue` for negative lengths.
pub fn parse_non_negative_length(input: &mut Parser<'_, '_>) -> Result<Length, ParseError> {
    let length = parse_length(input)?;
    if length.value < 0.0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<Length, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_length(&mut parser)
    }

    #[test]
    fn em_resolves_against_font_size() {
        let length = parse("2.5em").unwrap_or(Length::zero());
        let computed = length.compute(FontContext::from_em(16.0));
        assert_eq!(computed, Length::computed(40.0));
    }

    #[test]
    fn ex_uses_half_em_by_default() {
        let length = Length {
            value: 2.0,
            unit: LengthUnit::Exs,
        };
        assert_eq!(
            length.compute(FontContext::from_em(20.0)),
            Length::computed(20.0)
        );
    }

    #[test]
    fn physical_units_pass_through_compute() {
        let length = parse("12pt").unwrap_or(Length::zero());
        assert_eq!(length.compute(FontContext::from_em(16.0)), length);
    }

    #[test]
    fn zero_serializes_bare() {
        assert_eq!(Length::computed(0.0).to_string(), "0");
        assert_eq!(
            Length {
                value: 0.0,
                unit: LengthUnit::Centimeters
            }
            .to_string(),
            "0"
        );
        assert_eq!(Length::computed(45.0).to_string(), "45px");
    }

    #[test]
    fn unitless_non_zero_is_rejected() {
        assert_eq!(parse("12"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("0"), Ok(Length::zero()));
        assert_eq!(parse("3vw"), Err(ParseError::UnexpectedToken));
    }
}
