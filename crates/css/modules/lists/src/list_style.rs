//! CSS 2.1 §12.5 Lists: `list-style-type`, `list-style-position`,
//! `list-style-image` and the `list-style` shorthand.
//! See <https://www.w3.org/TR/CSS21/generate.html#lists>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    ParseError, Specified, Url, inherit, keyword_property, parse_url, try_inherit,
};

keyword_property! {
    /// Marker style. `none` suppresses the marker.
    pub enum ListStyleType {
        Disc => "disc",
        Circle => "circle",
        Square => "square",
        Decimal => "decimal",
        DecimalLeadingZero => "decimal-leading-zero",
        LowerRoman => "lower-roman",
        UpperRoman => "upper-roman",
        LowerGreek => "lower-greek",
        LowerLatin => "lower-latin",
        UpperLatin => "upper-latin",
        LowerAlpha => "lower-alpha",
        UpperAlpha => "upper-alpha",
        Armenian => "armenian",
        Georgian => "georgian",
        None => "none",
    }
    initial = Disc;
}

keyword_property! {
    pub enum ListStylePosition {
        Inside => "inside",
        Outside => "outside",
    }
    initial = Outside;
}

/// `list-style-image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStyleImage {
    Inherit,
    None,
    Url(Url),
}

impl ListStyleImage {
    /// Parse `<url> | none | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("none"))
            .is_ok()
        {
            return Ok(Self::None);
        }
        Ok(Self::Url(parse_url(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for ListStyleImage {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for ListStyleImage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Url(url) => write!(formatter, "{url}"),
        }
    }
}

/// The three longhands set by `list-style`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListStyle {
    pub style_type: ListStyleType,
    pub position: ListStylePosition,
    pub image: ListStyleImage,
}

/// Parse `list-style`: type, position and image in any order.
///
/// A `none` keyword sets whichever of type and image is not given explicitly;
/// two `none`s set both.
///
/// # Errors
/// Returns an error for repeated components or a `none` with nothing left to fill.
pub fn parse_list_style_shorthand(input: &mut Parser<'_, '_>) -> Result<ListStyle, ParseError> {
    if try_inherit(input) {
        return Ok(ListStyle {
            style_type: ListStyleType::Inherit,
            position: ListStylePosition::Inherit,
            image: ListStyleImage::Inherit,
        });
    }
    let mut style_type = None;
    let mut position = None;
    let mut image = None;
    let mut nones = 0_usize;
    while !input.is_exhausted() {
        if input
            .try_parse(|inner| inner.expect_ident_matching("none"))
            .is_ok()
        {
            nones += 1;
        } else if position.is_none()
            && let Ok(parsed) = input.try_parse(ListStylePosition::parse_keyword)
        {
            position = Some(parsed);
        } else if style_type.is_none()
            && let Ok(parsed) = input.try_parse(ListStyleType::parse_keyword)
        {
            style_type = Some(parsed);
        } else if image.is_none()
            && let Ok(url) = input.try_parse(parse_url)
        {
            image = Some(ListStyleImage::Url(url));
        } else {
            return Err(ParseError::UnexpectedToken);
        }
    }
    for _ in 0..nones {
        if style_type.is_none() {
            style_type = Some(ListStyleType::None);
        } else if image.is_none() {
            image = Some(ListStyleImage::None);
        } else {
            return Err(ParseError::InvalidValue);
        }
    }
    if nones == 0 && style_type.is_none() && position.is_none() && image.is_none() {
        return Err(ParseError::EndOfInput);
    }
    Ok(ListStyle {
        style_type: style_type.unwrap_or_else(ListStyleType::initial),
        position: position.unwrap_or_else(ListStylePosition::initial),
        image: image.unwrap_or_else(ListStyleImage::initial),
    })
}
