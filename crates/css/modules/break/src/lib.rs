//! CSS 2.1 §13 Paged media — page breaks, `orphans` and `widows`.
//! See <https://www.w3.org/TR/CSS21/page.html#page-breaks>

#![forbid(unsafe_code)]

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{ParseError, Specified, inherit, keyword_property, parse_integer, try_inherit};

keyword_property! {
    /// `page-break-before` and `page-break-after`.
    pub enum PageBreak {
        Auto => "auto",
        Always => "always",
        Avoid => "avoid",
        Left => "left",
        Right => "right",
    }
    initial = Auto;
}

keyword_property! {
    pub enum PageBreakInside {
        Auto => "auto",
        Avoid => "avoid",
    }
    initial = Auto;
}

/// `orphans` and `widows`: minimum line count kept together at a page break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCount {
    Inherit,
    Count(u32),
}

impl LineCount {
    /// Parse `<integer> | inherit`; the integer must be at least 1.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` for zero or negative counts.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        let count = parse_integer(input)?;
        u32::try_from(count)
            .ok()
            .filter(|count| *count >= 1)
            .map(Self::Count)
            .ok_or(ParseError::InvalidValue)
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for LineCount {
    fn initial() -> Self {
        Self::Count(2)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Count(count) => write!(formatter, "{count}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<LineCount, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        LineCount::parse(&mut parser)
    }

    #[test]
    fn counts_are_positive_integers() {
        assert_eq!(parse("3"), Ok(LineCount::Count(3)));
        assert_eq!(parse("0"), Err(ParseError::InvalidValue));
        assert_eq!(parse("1.5"), Err(ParseError::UnexpectedToken));
    }

    #[test]
    fn inherited_count() {
        let mut widows = LineCount::Inherit;
        widows.compute(Some(&LineCount::Count(4)));
        assert_eq!(widows, LineCount::Count(4));
        let mut root = LineCount::Inherit;
        root.compute(None);
        assert_eq!(root.to_string(), "2");
        assert_eq!(PageBreak::from_keyword("ALWAYS"), Some(PageBreak::Always));
        assert_eq!(PageBreakInside::initial(), PageBreakInside::Auto);
    }
}
