//! CSS 2.1 §8.3 Margin properties
//! See <https://www.w3.org/TR/CSS21/box.html#margin-properties>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit, parse_length,
    parse_percentage, parse_sides, try_inherit,
};

/// `margin-top`, `margin-right`, `margin-bottom`, `margin-left`. Negative values allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginWidth {
    Inherit,
    Auto,
    Length(Length),
    Percentage(Percentage),
}

impl MarginWidth {
    /// Parse `<length> | <percentage> | auto | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if input.try_parse(|inner| inner.expect_ident_matching("auto")).is_ok() {
            return Ok(Self::Auto);
        }
        if let Ok(percentage) = input.try_parse(parse_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_length(input)?))
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

impl Specified for MarginWidth {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for MarginWidth {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// Parse the `margin` shorthand into `[top, right, bottom, left]`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when any of the 1-4 values is invalid.
pub fn parse_margin_shorthand(input: &mut Parser<'_, '_>) -> Result<[MarginWidth; 4], ParseError> {
    if try_inherit(input) {
        return Ok([MarginWidth::Inherit; 4]);
    }
    parse_sides(input, MarginWidth::parse_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::LengthUnit;
    use css_values_units::cssparser::ParserInput;

    #[test]
    fn shorthand_expands_auto_and_negative_lengths() {
        let mut input = ParserInput::new("-4px auto");
        let mut parser = Parser::new(&mut input);
        let sides = parse_margin_shorthand(&mut parser);
        assert_eq!(
            sides,
            Ok([
                MarginWidth::Length(Length::px(-4.0)),
                MarginWidth::Auto,
                MarginWidth::Length(Length::px(-4.0)),
                MarginWidth::Auto,
            ])
        );
    }

    #[test]
    fn em_margins_resolve() {
        let mut margin = MarginWidth::Length(Length {
            value: 1.5,
            unit: LengthUnit::Ems,
        });
        margin.compute(None, FontContext::from_em(10.0));
        assert_eq!(margin, MarginWidth::Length(Length::computed(15.0)));
        assert_eq!(margin.to_string(), "15px");
    }
}
