//! §8 `letter-spacing` and `word-spacing`.
//! See <https://www.w3.org/TR/CSS21/text.html#spacing-props>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{FontContext, Length, ParseError, Specified, inherit, parse_length, try_inherit};

/// Extra space between letters or words: `normal | <length>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    Inherit,
    Normal,
    Length(Length),
}

impl Spacing {
    /// Parse `normal | <length> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("normal"))
            .is_ok()
        {
            return Ok(Self::Normal);
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

impl Specified for Spacing {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Normal => formatter.write_str("normal"),
            Self::Length(length) => write!(formatter, "{length}"),
        }
    }
}
