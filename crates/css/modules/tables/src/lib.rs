//! CSS 2.1 §17 Tables — the table property values.
//! See <https://www.w3.org/TR/CSS21/tables.html>

#![forbid(unsafe_code)]

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Specified, inherit, keyword_property,
    parse_non_negative_length, try_inherit,
};

keyword_property! {
    /// §17.5.2 Table width algorithm selection.
    pub enum TableLayout {
        Auto => "auto",
        Fixed => "fixed",
    }
    initial = Auto;
}

keyword_property! {
    /// §17.4.1 Caption placement.
    pub enum CaptionSide {
        Top => "top",
        Bottom => "bottom",
    }
    initial = Top;
}

keyword_property! {
    /// §17.6 Border model selection.
    pub enum BorderCollapse {
        Collapse => "collapse",
        Separate => "separate",
    }
    initial = Separate;
}

keyword_property! {
    /// §17.6.1.1 Borders and backgrounds around empty cells.
    pub enum EmptyCells {
        Show => "show",
        Hide => "hide",
    }
    initial = Show;
}

/// §17.6.1 `border-spacing`: one length for both axes, or horizontal then vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderSpacing {
    Inherit,
    Spacing { horizontal: Length, vertical: Length },
}

impl BorderSpacing {
    /// Parse `<length> <length>? | inherit`. Lengths may not be negative.
    ///
    /// # Errors
    /// Returns an error for negative or missing lengths.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        let horizontal = parse_non_negative_length(input)?;
        let vertical = input
            .try_parse(parse_non_negative_length)
            .unwrap_or(horizontal);
        Ok(Self::Spacing {
            horizontal,
            vertical,
        })
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Spacing {
            horizontal,
            vertical,
        } = self
        {
            *horizontal = horizontal.compute(font);
            *vertical = vertical.compute(font);
        }
    }
}

impl Specified for BorderSpacing {
    fn initial() -> Self {
        Self::Spacing {
            horizontal: Length::zero(),
            vertical: Length::zero(),
        }
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderSpacing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Spacing {
                horizontal,
                vertical,
            } if horizontal == vertical => write!(formatter, "{horizontal}"),
            Self::Spacing {
                horizontal,
                vertical,
            } => write!(formatter, "{horizontal} {vertical}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<BorderSpacing, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        BorderSpacing::parse(&mut parser)
    }

    #[test]
    fn single_length_applies_to_both_axes() {
        let mut spacing = parse("1em").unwrap_or(BorderSpacing::Inherit);
        spacing.compute(None, FontContext::from_em(12.0));
        assert_eq!(spacing.to_string(), "12px");
        assert_eq!(
            parse("2px 4px").map(|value| value.to_string()),
            Ok("2px 4px".to_owned())
        );
    }

    #[test]
    fn negative_spacing_is_invalid() {
        assert_eq!(parse("-1px"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn keywords() {
        let mut collapse = BorderCollapse::Inherit;
        collapse.compute(Some(&BorderCollapse::Collapse));
        assert_eq!(collapse, BorderCollapse::Collapse);
        assert_eq!(CaptionSide::from_keyword("Bottom"), Some(CaptionSide::Bottom));
        assert_eq!(EmptyCells::Hide.to_string(), "hide");
        assert_eq!(TableLayout::from_keyword("fixed"), Some(TableLayout::Fixed));
    }
}
