//! `counter-reset` and `counter-increment`.
//! See <https://www.w3.org/TR/css-lists-3/#auto-numbering>

use core::fmt;
use css_values_units::cssparser::{Parser, serialize_identifier};
use css_values_units::{ParseError, Specified, inherit, parse_integer, try_inherit};

/// Default step of `counter-increment`.
pub const DEFAULT_INCREMENT: i32 = 1;
/// Default value of `counter-reset`.
pub const DEFAULT_RESET: i32 = 0;

/// One `<identifier> <integer>?` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterChange {
    pub name: String,
    pub value: i32,
}

/// Value of `counter-reset` or `counter-increment`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterList {
    Inherit,
    None,
    Changes(Vec<CounterChange>),
}

/// Parse a counter name; the CSS-wide and `none` keywords are not names.
pub(crate) fn parse_counter_name(input: &mut Parser<'_, '_>) -> Result<String, ParseError> {
    let name = input.expect_ident()?;
    if ["none", "inherit", "initial", "default"]
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
    {
        return Err(ParseError::InvalidValue);
    }
    Ok(name.as_ref().to_owned())
}

impl CounterList {
    /// Parse `[<identifier> <integer>?]+ | none | inherit`; entries without an
    /// integer take `default_value`.
    ///
    /// # Errors
    /// Returns an error for reserved names or stray tokens.
    pub fn parse(input: &mut Parser<'_, '_>, default_value: i32) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("none"))
            .is_ok()
        {
            return Ok(Self::None);
        }
        let mut changes = vec![];
        loop {
            let name = parse_counter_name(input)?;
            let value = input.try_parse(parse_integer).unwrap_or(default_value);
            changes.push(CounterChange { name, value });
            if input.is_exhausted() {
                return Ok(Self::Changes(changes));
            }
        }
    }

    /// `counter-increment` grammar.
    ///
    /// # Errors
    /// As `parse`.
    pub fn parse_increment(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        Self::parse(input, DEFAULT_INCREMENT)
    }

    /// `counter-reset` grammar.
    ///
    /// # Errors
    /// As `parse`.
    pub fn parse_reset(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        Self::parse(input, DEFAULT_RESET)
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }

    /// Entries in source order; empty for `none`.
    pub fn changes(&self) -> &[CounterChange] {
        match self {
            Self::Changes(changes) => changes,
            Self::Inherit | Self::None => &[],
        }
    }
}

impl Specified for CounterList {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for CounterList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Changes(changes) => {
                for (index, change) in changes.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(" ")?;
                    }
                    serialize_identifier(&change.name, formatter)?;
                    write!(formatter, " {}", change.value)?;
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

    #[test]
    fn missing_integers_take_the_default() {
        let mut input = ParserInput::new("chapter section 2");
        let mut parser = Parser::new(&mut input);
        let list = CounterList::parse_increment(&mut parser).unwrap_or(CounterList::None);
        assert_eq!(list.to_string(), "chapter 1 section 2");

        let mut reset_input = ParserInput::new("chapter");
        let mut reset_parser = Parser::new(&mut reset_input);
        let reset = CounterList::parse_reset(&mut reset_parser).unwrap_or(CounterList::None);
        assert_eq!(reset.changes().first().map(|change| change.value), Some(0));
    }

    #[test]
    fn reserved_names_are_rejected() {
        let mut input = ParserInput::new("chapter none");
        let mut parser = Parser::new(&mut input);
        assert_eq!(
            CounterList::parse_increment(&mut parser),
            Err(ParseError::InvalidValue)
        );
    }
}
