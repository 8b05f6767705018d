//! §5 Outline properties.
//! See <https://www.w3.org/TR/css-ui-3/#outline-props>
//!
//! `outline-style` and `outline-width` share their value sets with the border
//! properties; `hidden` is not a valid outline style.

use core::fmt;
use css_backgrounds_borders::{BorderStyle, BorderWidth};
use css_values_units::cssparser::Parser;
use css_values_units::{Color, ParseError, Specified, inherit, parse_color, try_inherit};

pub type OutlineStyle = BorderStyle;
pub type OutlineWidth = BorderWidth;

/// Parse `outline-style`.
///
/// # Errors
/// Returns `ParseError::InvalidValue` for `hidden`, or an error for unknown keywords.
pub fn parse_outline_style(input: &mut Parser<'_, '_>) -> Result<OutlineStyle, ParseError> {
    reject_hidden(OutlineStyle::parse(input)?)
}

fn parse_outline_style_keyword(input: &mut Parser<'_, '_>) -> Result<OutlineStyle, ParseError> {
    reject_hidden(OutlineStyle::parse_keyword(input)?)
}

fn reject_hidden(style: OutlineStyle) -> Result<OutlineStyle, ParseError> {
    if style == OutlineStyle::Hidden {
        return Err(ParseError::InvalidValue);
    }
    Ok(style)
}

/// `outline-color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineColor {
    Inherit,
    Invert,
    CurrentColor,
    Color(Color),
}

impl OutlineColor {
    /// Parse `<color> | invert | currentcolor | inherit`.
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
            .try_parse(|inner| inner.expect_ident_matching("invert"))
            .is_ok()
        {
            return Ok(Self::Invert);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("currentcolor"))
            .is_ok()
        {
            return Ok(Self::CurrentColor);
        }
        Ok(Self::Color(parse_color(input)?))
    }

    /// `currentcolor` becomes the element's `color`; `invert` is kept.
    pub fn compute(&mut self, parent: Option<&Self>, color: Color) {
        if inherit(self, parent) {
            return;
        }
        if matches!(self, Self::CurrentColor) {
            *self = Self::Color(color);
        }
    }
}

impl Specified for OutlineColor {
    fn initial() -> Self {
        Self::Invert
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for OutlineColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Invert => formatter.write_str("invert"),
            Self::CurrentColor => formatter.write_str("currentcolor"),
            Self::Color(color) => write!(formatter, "{color}"),
        }
    }
}

/// The three longhands set by `outline`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: OutlineColor,
    pub style: OutlineStyle,
    pub width: OutlineWidth,
}

/// Parse `outline`: color, style and width in any order, each at most once.
///
/// # Errors
/// Returns an error on repeated, unknown or missing components.
pub fn parse_outline_shorthand(input: &mut Parser<'_, '_>) -> Result<Outline, ParseError> {
    if try_inherit(input) {
        return Ok(Outline {
            color: OutlineColor::Inherit,
            style: OutlineStyle::Inherit,
            width: OutlineWidth::Inherit,
        });
    }
    let mut color = None;
    let mut style = None;
    let mut width = None;
    while !input.is_exhausted() {
        if style.is_none()
            && let Ok(parsed) = input.try_parse(parse_outline_style_keyword)
        {
            style = Some(parsed);
        } else if width.is_none()
            && let Ok(parsed) = input.try_parse(OutlineWidth::parse_value)
        {
            width = Some(parsed);
        } else if color.is_none()
            && let Ok(parsed) = input.try_parse(OutlineColor::parse_value)
        {
            color = Some(parsed);
        } else {
            return Err(ParseError::UnexpectedToken);
        }
    }
    if color.is_none() && style.is_none() && width.is_none() {
        return Err(ParseError::EndOfInput);
    }
    Ok(Outline {
        color: color.unwrap_or_else(OutlineColor::initial),
        style: style.unwrap_or_else(OutlineStyle::initial),
        width: width.unwrap_or_else(OutlineWidth::initial),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<Outline, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_outline_shorthand(&mut parser)
    }

    #[test]
    fn components_in_any_order() {
        let outline = parse("red dashed thin");
        assert_eq!(
            outline,
            Ok(Outline {
                color: OutlineColor::Color(Color::rgb(255, 0, 0)),
                style: OutlineStyle::Dashed,
                width: OutlineWidth::Thin,
            })
        );
    }

    #[test]
    fn hidden_is_not_an_outline_style() {
        assert_eq!(parse("hidden"), Err(ParseError::UnexpectedToken));
        let mut input = ParserInput::new("hidden");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_outline_style(&mut parser), Err(ParseError::InvalidValue));
    }

    #[test]
    fn omitted_parts_reset() {
        let outline = parse("solid");
        assert_eq!(
            outline.map(|value| (value.color, value.width)),
            Ok((OutlineColor::Invert, OutlineWidth::Medium))
        );
    }
}
