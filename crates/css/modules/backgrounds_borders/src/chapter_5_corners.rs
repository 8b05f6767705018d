//! §5 Rounded corners — `border-*-radius` and `border-radius`.
//! See <https://www.w3.org/TR/css-backgrounds-3/#corners>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit, parse_non_negative_length,
    parse_non_negative_percentage, parse_sides, try_inherit,
};

/// One radius of a corner ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusComponent {
    Length(Length),
    Percentage(Percentage),
}

impl RadiusComponent {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }

    fn compute(&mut self, font: FontContext) {
        if let Self::Length(length) = self {
            *length = length.compute(font);
        }
    }
}

impl fmt::Display for RadiusComponent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// `border-top-left-radius` and friends: horizontal and vertical radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderRadius {
    Inherit,
    Radii(RadiusComponent, RadiusComponent),
}

impl BorderRadius {
    /// Parse `[<length> | <percentage>]{1,2} | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative or missing radii.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        let horizontal = RadiusComponent::parse(input)?;
        let vertical = input
            .try_parse(RadiusComponent::parse)
            .unwrap_or(horizontal);
        Ok(Self::Radii(horizontal, vertical))
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Radii(horizontal, vertical) = self {
            horizontal.compute(font);
            vertical.compute(font);
        }
    }
}

impl Specified for BorderRadius {
    fn initial() -> Self {
        let zero = RadiusComponent::Length(Length::zero());
        Self::Radii(zero, zero)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Radii(horizontal, vertical) if horizontal == vertical => {
                write!(formatter, "{horizontal}")
            }
            Self::Radii(horizontal, vertical) => write!(formatter, "{horizontal} {vertical}"),
        }
    }
}

/// Parse `border-radius` into `[top-left, top-right, bottom-right, bottom-left]`.
///
/// Up to four horizontal radii, optionally followed by `/` and up to four vertical
/// radii; each group is expanded like the box edges.
///
/// # Errors
/// Returns an error for negative values or an empty group.
pub fn parse_border_radius_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<[BorderRadius; 4], ParseError> {
    if try_inherit(input) {
        return Ok([BorderRadius::Inherit; 4]);
    }
    let horizontal = parse_sides(input, RadiusComponent::parse)?;
    let vertical = if input.try_parse(|inner| inner.expect_delim('/')).is_ok() {
        parse_sides(input, RadiusComponent::parse)?
    } else {
        horizontal
    };
    let [h0, h1, h2, h3] = horizontal;
    let [v0, v1, v2, v3] = vertical;
    Ok([
        BorderRadius::Radii(h0, v0),
        BorderRadius::Radii(h1, v1),
        BorderRadius::Radii(h2, v2),
        BorderRadius::Radii(h3, v3),
    ])
}
