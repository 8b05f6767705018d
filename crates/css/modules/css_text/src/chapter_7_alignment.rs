//! §7.1 `text-align` and §9.1 `text-indent`.
//! See <https://www.w3.org/TR/css-text-3/#text-align-property>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit, keyword_property,
    parse_length, parse_percentage, try_inherit,
};

keyword_property! {
    pub enum TextAlign {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
    initial = Left;
}

/// `text-indent`. Negative values are allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextIndent {
    Inherit,
    Length(Length),
    Percentage(Percentage),
}

impl TextIndent {
    /// Parse `<length> | <percentage> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if let Ok(percentage) = input.try_parse(parse_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_length(input)?))
    }

    /// Percentages stay relative to the containing block width.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Length(length) = self {
            *length = length.compute(font);
        }
    }
}

impl Specified for TextIndent {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for TextIndent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    #[test]
    fn negative_em_indent_resolves() {
        let mut input = ParserInput::new("-2em");
        let mut parser = Parser::new(&mut input);
        let mut indent = TextIndent::parse(&mut parser).unwrap_or(TextIndent::Inherit);
        indent.compute(None, FontContext::from_em(10.0));
        assert_eq!(indent, TextIndent::Length(Length::computed(-20.0)));
    }

    #[test]
    fn inherited_alignment() {
        let mut align = TextAlign::Inherit;
        align.compute(Some(&TextAlign::Justify));
        assert_eq!(align, TextAlign::Justify);
    }
}
