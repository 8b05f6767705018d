//! CSS 2.1 §10.2-10.7 `width`, `height`, `min-*` and `max-*`
//! See <https://www.w3.org/TR/CSS21/visudet.html#the-width-property>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit,
    parse_non_negative_length, parse_non_negative_percentage, try_inherit,
};

/// Shared grammar: `<length> | <percentage>`, both non-negative.
fn parse_extent(input: &mut Parser<'_, '_>) -> Result<Extent, ParseError> {
    if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
        return Ok(Extent::Percentage(percentage));
    }
    Ok(Extent::Length(parse_non_negative_length(input)?))
}

enum Extent {
    Length(Length),
    Percentage(Percentage),
}

fn is_keyword(input: &mut Parser<'_, '_>, keyword: &str) -> bool {
    input
        .try_parse(|inner| inner.expect_ident_matching(keyword))
        .is_ok()
}

/// `width` and `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    Inherit,
    Auto,
    Length(Length),
    Percentage(Percentage),
}

impl Size {
    /// Parse `<length> | <percentage> | auto | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative or non-length values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if is_keyword(input, "auto") {
            return Ok(Self::Auto);
        }
        Ok(match parse_extent(input)? {
            Extent::Length(length) => Self::Length(length),
            Extent::Percentage(percentage) => Self::Percentage(percentage),
        })
    }

    /// Resolve the value.
    ///
    /// A percentage whose containing block size depends on content
    /// (`containing_block_auto`) computes to `auto`; CSS 2.1 only does this for
    /// heights, so callers pass `false` for widths.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext, containing_block_auto: bool) {
        if inherit(self, parent) {
            return;
        }
        match self {
            Self::Length(length) => *length = length.compute(font),
            Self::Percentage(_) if containing_block_auto => *self = Self::Auto,
            Self::Inherit | Self::Auto | Self::Percentage(_) => {}
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl Specified for Size {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// `min-width` and `min-height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MinSize {
    Inherit,
    Length(Length),
    Percentage(Percentage),
}

impl MinSize {
    /// Parse `<length> | <percentage> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative or non-length values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(match parse_extent(input)? {
            Extent::Length(length) => Self::Length(length),
            Extent::Percentage(percentage) => Self::Percentage(percentage),
        })
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

impl Specified for MinSize {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for MinSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// `max-width` and `max-height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaxSize {
    Inherit,
    None,
    Length(Length),
    Percentage(Percentage),
}

impl MaxSize {
    /// Parse `<length> | <percentage> | none | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative or non-length values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if is_keyword(input, "none") {
            return Ok(Self::None);
        }
        Ok(match parse_extent(input)? {
            Extent::Length(length) => Self::Length(length),
            Extent::Percentage(percentage) => Self::Percentage(percentage),
        })
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

impl Specified for MaxSize {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for MaxSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}
