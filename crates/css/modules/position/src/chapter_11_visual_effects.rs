//! CSS 2.1 §11.1 `overflow` and `clip`.
//! See <https://www.w3.org/TR/CSS21/visufx.html>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Specified, inherit, keyword_property, parse_length,
    parse_nested, try_inherit,
};

keyword_property! {
    /// `overflow`.
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
        Auto => "auto",
    }
    initial = Visible;
}

/// One offset of a `rect()` clip shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipEdge {
    Auto,
    Length(Length),
}

impl ClipEdge {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if input.try_parse(|inner| inner.expect_ident_matching("auto")).is_ok() {
            return Ok(Self::Auto);
        }
        Ok(Self::Length(parse_length(input)?))
    }
}

impl fmt::Display for ClipEdge {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => formatter.write_str("auto"),
            Self::Length(length) => write!(formatter, "{length}"),
        }
    }
}

/// `clip`: `auto` or `rect(top, right, bottom, left)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clip {
    Inherit,
    Auto,
    Rect([ClipEdge; 4]),
}

impl Clip {
    /// Parse `rect(<shape>) | auto | inherit`. The offsets may be separated by
    /// commas or, for legacy content, by whitespace only.
    ///
    /// # Errors
    /// Returns an error when the shape does not have exactly four offsets.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input.try_parse(|inner| inner.expect_ident_matching("auto")).is_ok() {
            return Ok(Self::Auto);
        }
        input.expect_function_matching("rect")?;
        let edges = parse_nested(input, |nested| {
            let top = ClipEdge::parse(nested)?;
            let with_commas = nested.try_parse(|inner| inner.expect_comma()).is_ok();
            let mut rest = [ClipEdge::Auto; 3];
            for (index, slot) in rest.iter_mut().enumerate() {
                if with_commas && index > 0 {
                    nested.expect_comma()?;
                }
                *slot = ClipEdge::parse(nested)?;
            }
            let [right, bottom, left] = rest;
            Ok([top, right, bottom, left])
        })?;
        Ok(Self::Rect(edges))
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Rect(edges) = self {
            for edge in edges.iter_mut() {
                if let ClipEdge::Length(length) = edge {
                    *length = length.compute(font);
                }
            }
        }
    }
}

impl Specified for Clip {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Rect([top, right, bottom, left]) => {
                write!(formatter, "rect({top}, {right}, {bottom}, {left})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<Clip, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        Clip::parse(&mut parser)
    }

    #[test]
    fn rect_accepts_commas_or_spaces() {
        let expected = Clip::Rect([
            ClipEdge::Length(Length::px(1.0)),
            ClipEdge::Auto,
            ClipEdge::Length(Length::px(3.0)),
            ClipEdge::Length(Length::zero()),
        ]);
        assert_eq!(parse("rect(1px, auto, 3px, 0)"), Ok(expected));
        assert_eq!(parse("rect(1px auto 3px 0)"), Ok(expected));
    }

    #[test]
    fn short_rect_is_rejected() {
        assert!(parse("rect(1px, 2px, 3px)").is_err());
    }
}
