//! §4 Borders — colors, styles, widths and their shorthands.
//! See <https://www.w3.org/TR/css-backgrounds-3/#borders>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    Color, FontContext, Length, ParseError, Specified, inherit, keyword_property, parse_color,
    parse_non_negative_length, parse_sides, try_inherit,
};

/// `border-top-color` and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Inherit,
    CurrentColor,
    Color(Color),
}

impl BorderColor {
    /// Parse `<color> | currentcolor | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for non-colors.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for non-colors.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if input
            .try_parse(|inner| inner.expect_ident_matching("currentcolor"))
            .is_ok()
        {
            return Ok(Self::CurrentColor);
        }
        Ok(Self::Color(parse_color(input)?))
    }

    /// `currentcolor` resolves to the element's computed `color`.
    pub fn compute(&mut self, parent: Option<&Self>, color: Color) {
        if inherit(self, parent) {
            return;
        }
        if matches!(self, Self::CurrentColor) {
            *self = Self::Color(color);
        }
    }

    /// The resolved color; only meaningful after `compute`.
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Inherit | Self::CurrentColor => None,
        }
    }
}

impl Specified for BorderColor {
    fn initial() -> Self {
        Self::CurrentColor
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::CurrentColor => formatter.write_str("currentcolor"),
            Self::Color(color) => write!(formatter, "{color}"),
        }
    }
}

keyword_property! {
    /// `border-top-style` and friends; also the value set of `outline-style`.
    pub enum BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
    initial = None;
}

impl BorderStyle {
    /// Styles that suppress the border entirely.
    pub const fn is_none_or_hidden(self) -> bool {
        matches!(self, Self::None | Self::Hidden)
    }
}

/// `border-top-width` and friends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderWidth {
    Inherit,
    Thin,
    Medium,
    Thick,
    Length(Length),
}

impl BorderWidth {
    pub const THIN_PX: f32 = 1.0;
    pub const MEDIUM_PX: f32 = 3.0;
    pub const THICK_PX: f32 = 5.0;

    /// Parse `thin | medium | thick | <length> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative lengths or unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for negative lengths or unknown keywords.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(length) = input.try_parse(parse_non_negative_length) {
            return Ok(Self::Length(length));
        }
        let name = input.expect_ident()?;
        match name.to_ascii_lowercase().as_str() {
            "thin" => Ok(Self::Thin),
            "medium" => Ok(Self::Medium),
            "thick" => Ok(Self::Thick),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    /// Resolve to a length. Keywords become pixels and a `none`/`hidden` border
    /// style forces zero.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext, style: BorderStyle) {
        if inherit(self, parent) {
            return;
        }
        let length = match *self {
            _ if style.is_none_or_hidden() => Length::computed(0.0),
            Self::Thin => Length::computed(Self::THIN_PX),
            Self::Medium | Self::Inherit => Length::computed(Self::MEDIUM_PX),
            Self::Thick => Length::computed(Self::THICK_PX),
            Self::Length(length) => length.compute(font),
        };
        *self = Self::Length(length);
    }

    /// The computed length, if resolved.
    pub const fn length(&self) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            Self::Inherit | Self::Thin | Self::Medium | Self::Thick => None,
        }
    }
}

impl Specified for BorderWidth {
    fn initial() -> Self {
        Self::Medium
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderWidth {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Thin => formatter.write_str("thin"),
            Self::Medium => formatter.write_str("medium"),
            Self::Thick => formatter.write_str("thick"),
            Self::Length(length) => write!(formatter, "{length}"),
        }
    }
}

/// Width, style and color of one border side, as set by `border` or
/// `border-top` and friends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSide {
    pub width: BorderWidth,
    pub style: BorderStyle,
    pub color: BorderColor,
}

/// Parse `border`/`border-<side>`: width, style and color in any order, each at
/// most once. Omitted parts take their initial values.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for repeated or unknown parts.
pub fn parse_border_side_shorthand(input: &mut Parser<'_, '_>) -> Result<BorderSide, ParseError> {
    if try_inherit(input) {
        return Ok(BorderSide {
            width: BorderWidth::Inherit,
            style: BorderStyle::Inherit,
            color: BorderColor::Inherit,
        });
    }
    let mut width = None;
    let mut style = None;
    let mut color = None;
    while !input.is_exhausted() {
        if width.is_none()
            && let Ok(parsed) = input.try_parse(BorderWidth::parse_value)
        {
            width = Some(parsed);
        } else if style.is_none()
            && let Ok(parsed) = input.try_parse(BorderStyle::parse_keyword)
        {
            style = Some(parsed);
        } else if color.is_none()
            && let Ok(parsed) = input.try_parse(BorderColor::parse_value)
        {
            color = Some(parsed);
        } else {
            return Err(ParseError::UnexpectedToken);
        }
    }
    if width.is_none() && style.is_none() && color.is_none() {
        return Err(ParseError::EndOfInput);
    }
    Ok(BorderSide {
        width: width.unwrap_or_else(BorderWidth::initial),
        style: style.unwrap_or_else(BorderStyle::initial),
        color: color.unwrap_or_else(BorderColor::initial),
    })
}

/// Parse `border-color` into `[top, right, bottom, left]`.
///
/// # Errors
/// Returns an error when any value is not a color.
pub fn parse_border_color_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<[BorderColor; 4], ParseError> {
    if try_inherit(input) {
        return Ok([BorderColor::Inherit; 4]);
    }
    parse_sides(input, BorderColor::parse_value)
}

/// Parse `border-style` into `[top, right, bottom, left]`.
///
/// # Errors
/// Returns an error when any value is not a border style.
pub fn parse_border_style_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<[BorderStyle; 4], ParseError> {
    if try_inherit(input) {
        return Ok([BorderStyle::Inherit; 4]);
    }
    parse_sides(input, BorderStyle::parse_keyword)
}

/// Parse `border-width` into `[top, right, bottom, left]`.
///
/// # Errors
/// Returns an error when any value is not a border width.
pub fn parse_border_width_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<[BorderWidth; 4], ParseError> {
    if try_inherit(input) {
        return Ok([BorderWidth::Inherit; 4]);
    }
    parse_sides(input, BorderWidth::parse_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn side(text: &str) -> Result<BorderSide, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_border_side_shorthand(&mut parser)
    }

    #[test]
    fn parts_in_any_order() {
        assert_eq!(
            side("blue dashed 2px"),
            Ok(BorderSide {
                width: BorderWidth::Length(Length::px(2.0)),
                style: BorderStyle::Dashed,
                color: BorderColor::Color(Color::rgb(0, 0, 255)),
            })
        );
    }

    #[test]
    fn omitted_parts_reset() {
        assert_eq!(
            side("solid"),
            Ok(BorderSide {
                width: BorderWidth::Medium,
                style: BorderStyle::Solid,
                color: BorderColor::CurrentColor,
            })
        );
        assert!(side("solid dotted").is_err());
    }

    #[test]
    fn width_follows_style() {
        let mut width = BorderWidth::Thick;
        width.compute(None, FontContext::from_em(16.0), BorderStyle::Solid);
        assert_eq!(width.length(), Some(Length::computed(5.0)));

        let mut hidden = BorderWidth::Length(Length::px(4.0));
        hidden.compute(None, FontContext::from_em(16.0), BorderStyle::Hidden);
        assert_eq!(hidden.length(), Some(Length::computed(0.0)));
    }

    #[test]
    fn current_color_takes_element_color() {
        let mut color = BorderColor::CurrentColor;
        color.compute(None, Color::rgb(1, 2, 3));
        assert_eq!(color.color(), Some(Color::rgb(1, 2, 3)));
    }
}
