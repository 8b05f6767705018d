//! CSS 2.1 §10.8 `line-height`.
//! See <https://www.w3.org/TR/CSS21/visudet.html#propdef-line-height>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, Number, ParseError, Percentage, ResourceCache, Specified, inherit,
    parse_non_negative_length, parse_non_negative_number, parse_non_negative_percentage,
    try_inherit,
};

/// Used value of `normal` as a multiple of the font size.
pub const NORMAL_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// `line-height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHeight {
    Inherit,
    Normal,
    Number(Number),
    Length(Length),
    Percentage(Percentage),
}

impl LineHeight {
    /// Parse `normal | <number> | <length> | <percentage> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for negative values.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if input
            .try_parse(|inner| inner.expect_ident_matching("normal"))
            .is_ok()
        {
            return Ok(Self::Normal);
        }
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        if let Ok(length) = input.try_parse(parse_non_negative_length) {
            return Ok(Self::Length(length));
        }
        Ok(Self::Number(parse_non_negative_number(input)?))
    }

    /// Numbers and percentages become pixels against the element's own font size;
    /// `normal` is kept.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        match *self {
            Self::Number(Number(factor)) => {
                *self = Self::Length(Length::computed(factor * font.em_size));
            }
            Self::Percentage(percentage) => {
                *self = Self::Length(Length::computed(percentage.of(font.em_size)));
            }
            Self::Length(length) => *self = Self::Length(length.compute(font)),
            Self::Inherit | Self::Normal => {}
        }
    }

    /// Line height in pixels, with `normal` taken as 1.2em.
    pub fn to_px(&self, resources: &ResourceCache, font: FontContext) -> f32 {
        match self {
            Self::Inherit | Self::Normal => font.em_size * NORMAL_LINE_HEIGHT_FACTOR,
            Self::Number(Number(factor)) => factor * font.em_size,
            Self::Percentage(percentage) => percentage.of(font.em_size),
            Self::Length(length) => resources.length_to_px(length.compute(font)),
        }
    }
}

impl Specified for LineHeight {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Normal => formatter.write_str("normal"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}
