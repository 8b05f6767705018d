//! `quotes`.
//! See <https://www.w3.org/TR/CSS21/generate.html#quotes-specify>

use core::fmt;
use css_values_units::cssparser::{Parser, serialize_string};
use css_values_units::{ParseError, ResourceCache, Specified, inherit, parse_string, try_inherit};

/// `quotes`. `auto` resolves to the resource environment's default pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quotes {
    Inherit,
    Auto,
    None,
    Pairs(Vec<(String, String)>),
}

impl Quotes {
    /// Parse `[<string> <string>]+ | none | auto | inherit`.
    ///
    /// # Errors
    /// Returns an error for an unpaired string.
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
        if input
            .try_parse(|inner| inner.expect_ident_matching("auto"))
            .is_ok()
        {
            return Ok(Self::Auto);
        }
        let mut pairs = vec![];
        loop {
            let open = parse_string(input)?;
            let close = parse_string(input)?;
            pairs.push((open, close));
            if input.is_exhausted() {
                return Ok(Self::Pairs(pairs));
            }
        }
    }

    pub fn compute(&mut self, parent: Option<&Self>, resources: &ResourceCache) {
        if inherit(self, parent) {
            return;
        }
        if matches!(self, Self::Auto) {
            *self = Self::Pairs(resources.default_quotes().to_vec());
        }
    }

    /// Quote pair for nesting `depth`; deeper levels reuse the last pair.
    pub fn pair(&self, depth: usize) -> Option<(&str, &str)> {
        match self {
            Self::Pairs(pairs) => pairs
                .get(depth)
                .or_else(|| pairs.last())
                .map(|(open, close)| (open.as_str(), close.as_str())),
            Self::Inherit | Self::Auto | Self::None => None,
        }
    }
}

impl Specified for Quotes {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Quotes {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::None => formatter.write_str("none"),
            Self::Pairs(pairs) => {
                for (index, (open, close)) in pairs.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(" ")?;
                    }
                    serialize_string(open, formatter)?;
                    formatter.write_str(" ")?;
                    serialize_string(close, formatter)?;
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

    fn parse(text: &str) -> Result<Quotes, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        Quotes::parse(&mut parser)
    }

    #[test]
    fn pairs_must_be_complete() {
        assert_eq!(
            parse("'<<' '>>' '<' '>'").map(|quotes| quotes.pair(5).map(|(open, _)| open.to_owned())),
            Ok(Some("<".to_owned()))
        );
        assert_eq!(parse("'<<' '>>' '<'"), Err(ParseError::EndOfInput));
    }

    #[test]
    fn auto_uses_resource_defaults() {
        let resources = ResourceCache::default();
        let mut quotes = Quotes::Auto;
        quotes.compute(None, &resources);
        assert_eq!(quotes.pair(0), Some(("\u{201c}", "\u{201d}")));
    }
}
