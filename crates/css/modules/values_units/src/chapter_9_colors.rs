//! CSS Values & Units Level 3 — §9 Colors
//! See <https://www.w3.org/TR/css-color-3/>
//!
//! The token is located with cssparser and its source text handed to
//! `csscolorparser`, which knows the named colors and functional notations.

use crate::{ParseError, serialize_number};
use core::fmt;
use csscolorparser::Color as ParsedColor;
use cssparser::{ParseError as CssParseError, Parser, Token};

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    /// Opaque color from channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Parse a color from free text, e.g. a configuration value.
    pub fn from_text(text: &str) -> Option<Self> {
        let parsed: ParsedColor = text.trim().parse().ok()?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Some(Self {
            red,
            green,
            blue,
            alpha,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255 {
            write!(
                formatter,
                "rgb({}, {}, {})",
                self.red, self.green, self.blue
            )
        } else {
            write!(
                formatter,
                "rgba({}, {}, {}, ",
                self.red, self.green, self.blue
            )?;
            serialize_number(f32::from(self.alpha) / 255.0, formatter)?;
            formatter.write_str(")")
        }
    }
}

/// Identifiers made only of hex digits (`bad`, `cafe`) would be read as hex
/// colors by `csscolorparser`; CSS requires the `#` prefix.
fn is_hex_lookalike(name: &str) -> bool {
    name.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Parse a CSS <color>: `#hex`, a named color, or `rgb()`/`rgba()`/`hsl()`/`hsla()`/`hwb()`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for unsupported or malformed input.
pub fn parse_color(input: &mut Parser<'_, '_>) -> Result<Color, ParseError> {
    let start = input.position();
    let token = input.next()?.clone();
    match token {
        Token::Hash(_) | Token::IDHash(_) => {}
        Token::Ident(name) => {
            let reserved = ["currentcolor", "none", "inherit"]
                .iter()
                .any(|keyword| name.eq_ignore_ascii_case(keyword));
            if reserved || is_hex_lookalike(&name) {
                return Err(ParseError::UnexpectedToken);
            }
        }
        Token::Function(name) => {
            let known = ["rgb", "rgba", "hsl", "hsla", "hwb"]
                .iter()
                .any(|function| name.eq_ignore_ascii_case(function));
            if !known {
                return Err(ParseError::UnexpectedToken);
            }
            input.parse_nested_block(|nested| {
                while nested.next().is_ok() {}
                Ok::<(), CssParseError<'_, ParseError>>(())
            })?;
        }
        _ => return Err(ParseError::UnexpectedToken),
    }
    Color::from_text(input.slice_from(start)).ok_or(ParseError::UnexpectedToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<Color, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_color(&mut parser)
    }

    #[test]
    fn named_hex_and_functions() {
        assert_eq!(parse("red"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(parse("#00f"), Ok(Color::rgb(0, 0, 255)));
        assert_eq!(parse("rgb(10, 20, 30)"), Ok(Color::rgb(10, 20, 30)));
        assert_eq!(parse("transparent"), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn hex_lookalike_identifiers_are_not_colors() {
        assert_eq!(parse("bad"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("none"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("url(x.png)"), Err(ParseError::UnexpectedToken));
    }
}
