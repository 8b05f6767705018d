//! Vendor box layout properties: `-clan-box-direction` and the four
//! `-clan-box-*-factor` weights used to stretch or shrink children of a
//! `display: -clan-box` container.

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    ParseError, Specified, inherit, keyword_property, parse_non_negative_number,
    serialize_number, try_inherit,
};

keyword_property! {
    /// `-clan-box-direction`: children are placed one after another along this axis.
    pub enum ClanBoxDirection {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
    initial = Horizontal;
}

/// `-clan-box-{width,height}-{expand,shrink}-factor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClanBoxSizingFactor {
    Inherit,
    Auto,
    Number(f32),
}

impl ClanBoxSizingFactor {
    /// Parse `auto | <number> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative numbers and unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("auto"))
            .is_ok()
        {
            return Ok(Self::Auto);
        }
        Ok(Self::Number(parse_non_negative_number(input)?.0))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }

    /// Weight used when distributing space; `auto` takes no share.
    pub const fn weight(&self) -> f32 {
        match self {
            Self::Number(number) => *number,
            Self::Inherit | Self::Auto => 0.0,
        }
    }
}

impl Specified for ClanBoxSizingFactor {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for ClanBoxSizingFactor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Number(number) => serialize_number(*number, formatter),
        }
    }
}
