//! Flexibility — `flex-grow`, `flex-shrink`, `flex-basis` and the `flex` shorthand
//! See <https://www.w3.org/TR/css-flexbox-1/#flexibility>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit, parse_non_negative_length,
    parse_non_negative_number, parse_non_negative_percentage, serialize_number, try_inherit,
};

/// Declare a non-negative `<number>` flex factor with its own initial value.
macro_rules! flex_factor {
    ($(#[$meta:meta])* $name:ident, initial = $initial:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum $name {
            Inherit,
            Factor(f32),
        }

        impl $name {
            /// Parse `<number> | inherit`; negative factors are invalid.
            ///
            /// # Errors
            /// Returns an error for negative or non-numeric values.
            pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
                if try_inherit(input) {
                    return Ok(Self::Inherit);
                }
                Self::parse_value(input)
            }

            /// Same as `parse` without `inherit`.
            ///
            /// # Errors
            /// Returns an error for negative or non-numeric values.
            pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
                Ok(Self::Factor(parse_non_negative_number(input)?.0))
            }

            pub fn compute(&mut self, parent: Option<&Self>) {
                inherit(self, parent);
            }

            pub const fn factor(&self) -> f32 {
                match self {
                    Self::Factor(value) => *value,
                    Self::Inherit => $initial,
                }
            }
        }

        impl Specified for $name {
            fn initial() -> Self {
                Self::Factor($initial)
            }

            fn is_inherit(&self) -> bool {
                matches!(self, Self::Inherit)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Inherit => formatter.write_str("inherit"),
                    Self::Factor(value) => serialize_number(*value, formatter),
                }
            }
        }
    };
}

flex_factor!(
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-grow-property>
    FlexGrow,
    initial = 0.0
);
flex_factor!(
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property>
    FlexShrink,
    initial = 1.0
);

/// `flex-basis`.
/// See <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlexBasis {
    Inherit,
    Auto,
    Content,
    Length(Length),
    Percentage(Percentage),
}

impl FlexBasis {
    /// Parse `auto | content | <length> | <percentage> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative sizes.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for negative sizes.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if input
            .try_parse(|inner| inner.expect_ident_matching("auto"))
            .is_ok()
        {
            return Ok(Self::Auto);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("content"))
            .is_ok()
        {
            return Ok(Self::Content);
        }
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

impl Specified for FlexBasis {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FlexBasis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Content => formatter.write_str("content"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// Longhands set by `flex`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flex {
    pub grow: FlexGrow,
    pub shrink: FlexShrink,
    pub basis: FlexBasis,
}

impl Flex {
    const fn new(grow: f32, shrink: f32, basis: FlexBasis) -> Self {
        Self {
            grow: FlexGrow::Factor(grow),
            shrink: FlexShrink::Factor(shrink),
            basis,
        }
    }
}

/// Parse `flex`: `none | auto | [<grow> <shrink>? || <basis>]`.
///
/// A lone factor implies a `0%` basis; a lone basis implies `1 1`.
///
/// # Errors
/// Returns an error for repeated or unknown components.
///
/// See <https://www.w3.org/TR/css-flexbox-1/#flex-property>
pub fn parse_flex_shorthand(input: &mut Parser<'_, '_>) -> Result<Flex, ParseError> {
    if try_inherit(input) {
        return Ok(Flex {
            grow: FlexGrow::Inherit,
            shrink: FlexShrink::Inherit,
            basis: FlexBasis::Inherit,
        });
    }
    if input
        .try_parse(|inner| {
            inner.expect_ident_matching("none")?;
            inner.expect_exhausted()
        })
        .is_ok()
    {
        return Ok(Flex::new(0.0, 0.0, FlexBasis::Auto));
    }
    let mut factors = None;
    let mut basis = None;
    while !input.is_exhausted() {
        if factors.is_none()
            && let Ok(grow) = input.try_parse(FlexGrow::parse_value)
        {
            let shrink = input.try_parse(FlexShrink::parse_value).ok();
            factors = Some((grow, shrink));
        } else if basis.is_none()
            && let Ok(parsed) = input.try_parse(FlexBasis::parse_value)
        {
            basis = Some(parsed);
        } else {
            return Err(ParseError::UnexpectedToken);
        }
    }
    match (factors, basis) {
        (None, None) => Err(ParseError::EndOfInput),
        (None, Some(basis)) => Ok(Flex::new(1.0, 1.0, basis)),
        (Some((grow, shrink)), basis) => Ok(Flex {
            grow,
            shrink: shrink.unwrap_or(FlexShrink::Factor(1.0)),
            basis: basis.unwrap_or(FlexBasis::Percentage(Percentage(0.0))),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn flex(text: &str) -> Result<Flex, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_flex_shorthand(&mut parser)
    }

    #[test]
    fn keywords() {
        assert_eq!(flex("none"), Ok(Flex::new(0.0, 0.0, FlexBasis::Auto)));
        assert_eq!(flex("auto"), Ok(Flex::new(1.0, 1.0, FlexBasis::Auto)));
    }

    #[test]
    fn lone_factor_gets_zero_basis() {
        assert_eq!(
            flex("2"),
            Ok(Flex::new(2.0, 1.0, FlexBasis::Percentage(Percentage(0.0))))
        );
        assert_eq!(
            flex("30px 2 3"),
            Ok(Flex::new(2.0, 3.0, FlexBasis::Length(Length::px(30.0))))
        );
    }

    #[test]
    fn negative_factor_is_rejected() {
        assert_eq!(flex("-1"), Err(ParseError::UnexpectedToken));
        assert_eq!(flex("1 2 3"), Err(ParseError::UnexpectedToken));
    }
}
