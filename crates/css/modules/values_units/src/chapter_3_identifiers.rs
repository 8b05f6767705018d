//! CSS Identifiers (used widely across CSS values)
//! See <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS identifier value (lowercased for canonicalization).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser<'_, '_>) -> Result<Ident, ParseError> {
    match input.next()? {
        Token::Ident(text) => Ok(Ident(text.as_ref().to_ascii_lowercase())),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Consume a lone `inherit` keyword, leaving the stream untouched otherwise.
///
/// Only succeeds when `inherit` is the whole remaining value, which is how every
/// shorthand in CSS 2.1 accepts it.
pub fn try_inherit(input: &mut Parser<'_, '_>) -> bool {
    input
        .try_parse(|inner| {
            inner.expect_ident_matching("inherit")?;
            inner.expect_exhausted()
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    #[test]
    fn identifiers_are_lowercased() {
        let mut input = ParserInput::new("Solid");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_ident(&mut parser), Ok(Ident("solid".to_owned())));
    }

    #[test]
    fn inherit_must_stand_alone() {
        let mut input = ParserInput::new("inherit red");
        let mut parser = Parser::new(&mut input);
        assert!(!try_inherit(&mut parser));
        // The stream was not advanced by the failed attempt.
        assert_eq!(parse_ident(&mut parser), Ok(Ident("inherit".to_owned())));
    }
}
