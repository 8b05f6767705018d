//! §6.2 `cursor`.
//! See <https://www.w3.org/TR/CSS21/ui.html#cursor-props>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{ParseError, Specified, Url, inherit, keyword_property, parse_url, try_inherit};

keyword_property! {
    /// Built-in cursor shapes.
    pub enum CursorKeyword {
        Auto => "auto",
        Crosshair => "crosshair",
        Default => "default",
        Pointer => "pointer",
        Move => "move",
        EResize => "e-resize",
        NeResize => "ne-resize",
        NwResize => "nw-resize",
        NResize => "n-resize",
        SeResize => "se-resize",
        SwResize => "sw-resize",
        SResize => "s-resize",
        WResize => "w-resize",
        Text => "text",
        Wait => "wait",
        Help => "help",
        Progress => "progress",
    }
    initial = Auto;
}

/// `cursor`: optional image URLs tried in order, then a required keyword fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cursor {
    Inherit,
    Cursor {
        images: Vec<Url>,
        fallback: CursorKeyword,
    },
}

impl Cursor {
    /// Parse `[<url> ,]* <keyword> | inherit`.
    ///
    /// # Errors
    /// Returns an error when the keyword fallback is missing.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        let mut images = Vec::new();
        while let Ok(url) = input.try_parse(parse_url) {
            images.push(url);
            input.expect_comma()?;
        }
        let fallback = CursorKeyword::parse_keyword(input)?;
        Ok(Self::Cursor { images, fallback })
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for Cursor {
    fn initial() -> Self {
        Self::Cursor {
            images: Vec::new(),
            fallback: CursorKeyword::Auto,
        }
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Cursor { images, fallback } => {
                for image in images {
                    write!(formatter, "{image}, ")?;
                }
                formatter.write_str(fallback.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<Cursor, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        Cursor::parse(&mut parser)
    }

    #[test]
    fn urls_then_keyword() {
        let cursor = parse("url(hand.cur), url(\"hand.png\"), pointer");
        assert_eq!(
            cursor,
            Ok(Cursor::Cursor {
                images: vec![Url("hand.cur".to_owned()), Url("hand.png".to_owned())],
                fallback: CursorKeyword::Pointer,
            })
        );
    }

    #[test]
    fn keyword_fallback_is_required() {
        assert!(parse("url(hand.cur)").is_err());
        assert!(parse("url(hand.cur) pointer").is_err());
    }
}
