//! CSS 2.1 §8.4 Padding properties
//! See <https://www.w3.org/TR/CSS21/box.html#padding-properties>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit,
    parse_non_negative_length, parse_non_negative_percentage, parse_sides, try_inherit,
};

/// `padding-top`, `padding-right`, `padding-bottom`, `padding-left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddingWidth {
    Inherit,
    Length(Length),
    Percentage(Percentage),
}

impl PaddingWidth {
    /// Parse `<length> | <percentage> | inherit`; negative values are invalid.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` for negative values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` for negative values.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Length(length) = self {
            *length = length.compute(font);
        }
    }
}

impl Specified for PaddingWidth {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for PaddingWidth {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// Parse the `padding` shorthand into `[top, right, bottom, left]`.
///
/// # Errors
/// Returns an error when any of the 1-4 values is invalid.
pub fn parse_padding_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<[PaddingWidth; 4], ParseError> {
    if try_inherit(input) {
        return Ok([PaddingWidth::Inherit; 4]);
    }
    parse_sides(input, PaddingWidth::parse_value)
}
