//! §7 Miscellaneous effects — `box-decoration-break` and `box-shadow`.
//! See <https://www.w3.org/TR/css-backgrounds-3/#misc>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    Color, FontContext, Length, ParseError, Specified, inherit, keyword_property, parse_color,
    parse_length, try_inherit,
};

keyword_property! {
    /// `box-decoration-break`.
    pub enum BoxDecorationBreak {
        Slice => "slice",
        Clone => "clone",
    }
    initial = Slice;
}

/// One entry of a `box-shadow` list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub inset: bool,
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur_radius: Length,
    pub spread_distance: Length,
    /// `None` until computed; an omitted color means the element's `color`.
    pub color: Option<Color>,
}

impl Shadow {
    /// `inset? && <length>{2,4} && <color>?`
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let mut inset = false;
        let mut lengths: Option<[Length; 4]> = None;
        let mut color = None;
        while !input.is_exhausted() {
            if !inset
                && input
                    .try_parse(|inner| inner.expect_ident_matching("inset"))
                    .is_ok()
            {
                inset = true;
            } else if lengths.is_none()
                && let Ok(parsed) = input.try_parse(parse_shadow_lengths)
            {
                lengths = Some(parsed);
            } else if color.is_none()
                && let Ok(parsed) = input.try_parse(parse_color)
            {
                color = Some(parsed);
            } else {
                break;
            }
        }
        let [offset_x, offset_y, blur_radius, spread_distance] =
            lengths.ok_or(ParseError::UnexpectedToken)?;
        if blur_radius.value < 0.0 {
            return Err(ParseError::InvalidValue);
        }
        Ok(Self {
            inset,
            offset_x,
            offset_y,
            blur_radius,
            spread_distance,
            color,
        })
    }

    fn compute(&mut self, font: FontContext, current_color: Color) {
        self.offset_x = self.offset_x.compute(font);
        self.offset_y = self.offset_y.compute(font);
        self.blur_radius = self.blur_radius.compute(font);
        self.spread_distance = self.spread_distance.compute(font);
        self.color.get_or_insert(current_color);
    }
}

/// Two offsets plus optional blur and spread.
fn parse_shadow_lengths(input: &mut Parser<'_, '_>) -> Result<[Length; 4], ParseError> {
    let offset_x = parse_length(input)?;
    let offset_y = parse_length(input)?;
    let blur_radius = input.try_parse(parse_length).unwrap_or_else(|_| Length::zero());
    let spread_distance = input.try_parse(parse_length).unwrap_or_else(|_| Length::zero());
    Ok([offset_x, offset_y, blur_radius, spread_distance])
}

impl fmt::Display for Shadow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            formatter.write_str("inset ")?;
        }
        write!(
            formatter,
            "{} {} {} {}",
            self.offset_x, self.offset_y, self.blur_radius, self.spread_distance
        )?;
        if let Some(color) = self.color {
            write!(formatter, " {color}")?;
        }
        Ok(())
    }
}

/// `box-shadow`.
#[derive(Clone, Debug, PartialEq)]
pub enum BoxShadow {
    Inherit,
    None,
    Shadows(Vec<Shadow>),
}

impl BoxShadow {
    /// Parse `none | <shadow>#  | inherit`.
    ///
    /// # Errors
    /// Returns an error for malformed shadows or a negative blur radius.
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
        let mut shadows = Vec::new();
        loop {
            shadows.push(Shadow::parse(input)?);
            if input.try_parse(|inner| inner.expect_comma()).is_err() {
                return Ok(Self::Shadows(shadows));
            }
        }
    }

    /// Resolve lengths and give color-less shadows the element's `color`.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext, color: Color) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Shadows(shadows) = self {
            for shadow in shadows.iter_mut() {
                shadow.compute(font, color);
            }
        }
    }
}

impl Specified for BoxShadow {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Shadows(shadows) => {
                for (index, shadow) in shadows.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{shadow}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<BoxShadow, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        BoxShadow::parse(&mut parser)
    }

    #[test]
    fn missing_color_becomes_current_color() {
        let mut shadow = parse("1px 2px, inset red 0 0 4px").unwrap_or(BoxShadow::None);
        shadow.compute(None, FontContext::from_em(16.0), Color::rgb(0, 128, 0));
        assert_eq!(
            shadow.to_string(),
            "1px 2px 0 0 rgb(0, 128, 0), inset 0 0 4px 0 rgb(255, 0, 0)"
        );
    }

    #[test]
    fn single_offset_is_rejected() {
        assert!(parse("1px red").is_err());
        assert!(parse("1px 1px -2px").is_err());
    }
}
