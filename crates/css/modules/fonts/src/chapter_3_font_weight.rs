//! §3.2 `font-weight`.
//! See <https://www.w3.org/TR/css-fonts-3/#font-weight-prop>

use core::fmt;
use css_values_units::cssparser::{Parser, Token};
use css_values_units::{ParseError, Specified, inherit, try_inherit};

const NORMAL_WEIGHT: u16 = 400;
const BOLD_WEIGHT: u16 = 700;

/// `font-weight`. Computes to a numeric weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Inherit,
    Normal,
    Bold,
    Bolder,
    Lighter,
    Weight(u16),
}

impl FontWeight {
    /// Parse `normal | bold | bolder | lighter | 100 | ... | 900 | inherit`.
    ///
    /// # Errors
    /// Returns an error for numbers that are not a multiple of 100 in `100..=900`.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for unknown keywords or weights.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        match input.next()? {
            Token::Ident(name) => match name.to_ascii_lowercase().as_str() {
                "normal" => Ok(Self::Normal),
                "bold" => Ok(Self::Bold),
                "bolder" => Ok(Self::Bolder),
                "lighter" => Ok(Self::Lighter),
                _ => Err(ParseError::UnexpectedToken),
            },
            Token::Number {
                int_value: Some(weight),
                ..
            } => u16::try_from(*weight)
                .ok()
                .filter(|value| (100..=900).contains(value) && value % 100 == 0)
                .map(Self::Weight)
                .ok_or(ParseError::InvalidValue),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    /// Resolve keywords to a number; `bolder`/`lighter` step from the parent weight
    /// (400 at the root).
    /// See <https://www.w3.org/TR/css-fonts-4/#relative-weights>
    pub fn compute(&mut self, parent: Option<&Self>) {
        if inherit(self, parent) {
            return;
        }
        let parent_weight = parent.map_or(NORMAL_WEIGHT, Self::value);
        *self = Self::Weight(match *self {
            Self::Normal | Self::Inherit => NORMAL_WEIGHT,
            Self::Bold => BOLD_WEIGHT,
            Self::Weight(weight) => weight,
            Self::Bolder => match parent_weight {
                0..350 => 400,
                350..550 => 700,
                _ => 900,
            },
            Self::Lighter => match parent_weight {
                0..550 => 100,
                550..750 => 400,
                _ => 700,
            },
        });
    }

    /// Numeric weight; keywords map to their nominal values.
    pub const fn value(&self) -> u16 {
        match self {
            Self::Weight(weight) => *weight,
            Self::Bold => BOLD_WEIGHT,
            Self::Inherit | Self::Normal | Self::Bolder | Self::Lighter => NORMAL_WEIGHT,
        }
    }
}

impl Specified for FontWeight {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Normal => formatter.write_str("normal"),
            Self::Bold => formatter.write_str("bold"),
            Self::Bolder => formatter.write_str("bolder"),
            Self::Lighter => formatter.write_str("lighter"),
            Self::Weight(weight) => write!(formatter, "{weight}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<FontWeight, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        FontWeight::parse(&mut parser)
    }

    #[test]
    fn numeric_weights_are_hundreds() {
        assert_eq!(parse("600"), Ok(FontWeight::Weight(600)));
        assert_eq!(parse("650"), Err(ParseError::InvalidValue));
        assert_eq!(parse("1000"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn relative_weights_follow_the_table() {
        let mut bolder = FontWeight::Bolder;
        bolder.compute(Some(&FontWeight::Weight(400)));
        assert_eq!(bolder, FontWeight::Weight(700));

        let mut lighter = FontWeight::Lighter;
        lighter.compute(Some(&FontWeight::Weight(900)));
        assert_eq!(lighter, FontWeight::Weight(700));

        let mut root = FontWeight::Bolder;
        root.compute(None);
        assert_eq!(root.to_string(), "700");
    }
}
