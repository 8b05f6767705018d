//! CSS Color Module Level 3 — the `color` property.
//! See <https://www.w3.org/TR/css-color-3/#foreground>

#![forbid(unsafe_code)]

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{Color, ParseError, ResourceCache, Specified, inherit, parse_color};

/// Specified/computed value of `color`. Inherited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorProperty {
    Inherit,
    /// The user agent's default text color; resolved from the resource cache.
    Initial,
    Rgba(Color),
}

impl ColorProperty {
    /// Parse `<color> | currentcolor | inherit`. On `color` itself
    /// `currentcolor` means `inherit`.
    /// See <https://www.w3.org/TR/css-color-3/#currentcolor>
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the value is not a color.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        for keyword in ["inherit", "currentcolor"] {
            if input
                .try_parse(|inner| inner.expect_ident_matching(keyword))
                .is_ok()
            {
                return Ok(Self::Inherit);
            }
        }
        Ok(Self::Rgba(parse_color(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>, resources: &ResourceCache) {
        if inherit(self, parent) {
            return;
        }
        if matches!(self, Self::Initial) {
            *self = Self::Rgba(resources.default_color());
        }
    }

    /// The resolved color; `Initial`/`Inherit` fall back to black before compute.
    pub fn color(&self) -> Color {
        match self {
            Self::Rgba(color) => *color,
            Self::Inherit | Self::Initial => Color::BLACK,
        }
    }
}

impl Specified for ColorProperty {
    fn initial() -> Self {
        Self::Initial
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for ColorProperty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Initial => formatter.write_str("initial"),
            Self::Rgba(color) => write!(formatter, "{color}"),
        }
    }
}
