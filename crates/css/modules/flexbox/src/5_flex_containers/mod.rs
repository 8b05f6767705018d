//! Flex Containers — `flex-direction`, `flex-wrap`, `flex-flow` and `order`
//! See <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{ParseError, Specified, inherit, keyword_property, parse_integer, try_inherit};

keyword_property! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
    initial = Row;
}

impl FlexDirection {
    /// Whether the main axis is the block axis.
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

keyword_property! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
    pub enum FlexWrap {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
    initial = Nowrap;
}

/// Longhands set by `flex-flow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlexFlow {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
}

/// Parse `flex-flow`: `<flex-direction> || <flex-wrap>`.
///
/// # Errors
/// Returns an error for repeated or unknown components.
///
/// See <https://www.w3.org/TR/css-flexbox-1/#flex-flow-property>
pub fn parse_flex_flow_shorthand(input: &mut Parser<'_, '_>) -> Result<FlexFlow, ParseError> {
    if try_inherit(input) {
        return Ok(FlexFlow {
            direction: FlexDirection::Inherit,
            wrap: FlexWrap::Inherit,
        });
    }
    let mut direction = None;
    let mut wrap = None;
    while !input.is_exhausted() {
        if direction.is_none()
            && let Ok(parsed) = input.try_parse(FlexDirection::parse_keyword)
        {
            direction = Some(parsed);
        } else if wrap.is_none()
            && let Ok(parsed) = input.try_parse(FlexWrap::parse_keyword)
        {
            wrap = Some(parsed);
        } else {
            return Err(ParseError::UnexpectedToken);
        }
    }
    if direction.is_none() && wrap.is_none() {
        return Err(ParseError::EndOfInput);
    }
    Ok(FlexFlow {
        direction: direction.unwrap_or_else(FlexDirection::initial),
        wrap: wrap.unwrap_or_else(FlexWrap::initial),
    })
}

/// `order`.
/// See <https://www.w3.org/TR/css-flexbox-1/#order-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Inherit,
    Integer(i32),
}

impl Order {
    /// Parse `<integer> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for non-integers.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Integer(parse_integer(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }

    /// Sort key for order-modified document order.
    pub const fn key(&self) -> i32 {
        match self {
            Self::Integer(value) => *value,
            Self::Inherit => 0,
        }
    }
}

impl Specified for Order {
    fn initial() -> Self {
        Self::Integer(0)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Integer(value) => write!(formatter, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn flow(text: &str) -> Result<FlexFlow, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_flex_flow_shorthand(&mut parser)
    }

    #[test]
    fn flow_in_either_order() {
        let expected = FlexFlow {
            direction: FlexDirection::ColumnReverse,
            wrap: FlexWrap::Wrap,
        };
        assert_eq!(flow("wrap column-reverse"), Ok(expected));
        assert_eq!(flow("column-reverse wrap"), Ok(expected));
        assert_eq!(
            flow("wrap").map(|value| value.direction),
            Ok(FlexDirection::Row)
        );
        assert_eq!(flow("row column"), Err(ParseError::UnexpectedToken));
    }

    #[test]
    fn direction_axes() {
        assert!(FlexDirection::ColumnReverse.is_column());
        assert!(FlexDirection::ColumnReverse.is_reverse());
        assert!(!FlexDirection::Row.is_reverse());
    }
}
