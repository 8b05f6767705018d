//! CSS Text Decoration Level 3 — `text-decoration` (CSS 2.1 line values).
//! See <https://www.w3.org/TR/CSS21/text.html#lining-striking-props>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{ParseError, Specified, inherit, try_inherit};

/// The set of decoration lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationLines {
    pub underline: bool,
    pub overline: bool,
    pub line_through: bool,
    pub blink: bool,
}

/// `text-decoration`. Not inherited; decorations propagate to descendants at
/// paint time instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDecoration {
    Inherit,
    None,
    Lines(DecorationLines),
}

impl TextDecoration {
    /// Parse `none | [underline || overline || line-through || blink] | inherit`.
    ///
    /// # Errors
    /// Returns an error for repeated or unknown keywords.
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
        let mut lines = DecorationLines::default();
        let mut seen = 0;
        while let Ok(ident) =
            input.try_parse(|inner| inner.expect_ident().map(|name| name.to_ascii_lowercase()))
        {
            let slot = match ident.as_str() {
                "underline" => &mut lines.underline,
                "overline" => &mut lines.overline,
                "line-through" => &mut lines.line_through,
                "blink" => &mut lines.blink,
                _ => return Err(ParseError::UnexpectedToken),
            };
            if *slot {
                return Err(ParseError::InvalidValue);
            }
            *slot = true;
            seen += 1;
        }
        if seen == 0 {
            return Err(ParseError::UnexpectedToken);
        }
        Ok(Self::Lines(lines))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for TextDecoration {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Lines(lines) => {
                let names = [
                    (lines.underline, "underline"),
                    (lines.overline, "overline"),
                    (lines.line_through, "line-through"),
                    (lines.blink, "blink"),
                ];
                let mut first = true;
                for (_, name) in names.iter().filter(|(set, _)| *set) {
                    if !first {
                        formatter.write_str(" ")?;
                    }
                    formatter.write_str(name)?;
                    first = false;
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

    fn parse(text: &str) -> Result<TextDecoration, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        TextDecoration::parse(&mut parser)
    }

    #[test]
    fn lines_in_any_order_serialize_canonically() {
        let decoration = parse("line-through underline");
        assert_eq!(
            decoration.map(|value| value.to_string()),
            Ok("underline line-through".to_owned())
        );
    }

    #[test]
    fn repeated_line_is_invalid() {
        assert_eq!(parse("underline underline"), Err(ParseError::InvalidValue));
        assert_eq!(parse("none"), Ok(TextDecoration::None));
    }
}
