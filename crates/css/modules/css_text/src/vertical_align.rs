//! CSS 2.1 §10.8 `vertical-align`.
//! See <https://www.w3.org/TR/CSS21/visudet.html#propdef-vertical-align>

use core::fmt;
use css_fonts::LineHeight;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, ResourceCache, Specified, inherit,
    parse_length, parse_percentage, try_inherit,
};

const KEYWORDS: [(&str, VerticalAlign); 8] = [
    ("baseline", VerticalAlign::Baseline),
    ("sub", VerticalAlign::Sub),
    ("super", VerticalAlign::Super),
    ("top", VerticalAlign::Top),
    ("text-top", VerticalAlign::TextTop),
    ("middle", VerticalAlign::Middle),
    ("bottom", VerticalAlign::Bottom),
    ("text-bottom", VerticalAlign::TextBottom),
];

/// `vertical-align`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAlign {
    Inherit,
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
    Length(Length),
    Percentage(Percentage),
}

impl VerticalAlign {
    /// Parse a keyword, `<length>`, `<percentage>` or `inherit`. Lengths and
    /// percentages may be negative.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if let Ok(keyword) = input.try_parse(|inner| {
            let ident = inner.expect_ident()?;
            KEYWORDS
                .iter()
                .find(|(name, _)| ident.eq_ignore_ascii_case(name))
                .map(|(_, value)| *value)
                .ok_or(ParseError::UnexpectedToken)
        }) {
            return Ok(keyword);
        }
        if let Ok(percentage) = input.try_parse(parse_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_length(input)?))
    }

    /// Percentages refer to the element's computed `line-height` (1.2em when
    /// `normal`) and become pixels.
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        resources: &ResourceCache,
        font: FontContext,
        line_height: &LineHeight,
    ) {
        if inherit(self, parent) {
            return;
        }
        match *self {
            Self::Percentage(percentage) => {
                let base = line_height.to_px(resources, font);
                *self = Self::Length(Length::computed(percentage.of(base)));
            }
            Self::Length(length) => *self = Self::Length(length.compute(font)),
            Self::Inherit
            | Self::Baseline
            | Self::Sub
            | Self::Super
            | Self::Top
            | Self::TextTop
            | Self::Middle
            | Self::Bottom
            | Self::TextBottom => {}
        }
    }
}

impl Specified for VerticalAlign {
    fn initial() -> Self {
        Self::Baseline
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
            keyword => {
                let name = KEYWORDS
                    .iter()
                    .find(|(_, value)| value == keyword)
                    .map_or("baseline", |(name, _)| name);
                formatter.write_str(name)
            }
        }
    }
}
