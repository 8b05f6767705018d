//! CSS Values & Units Level 3 — §4.3 Quoted strings and §4.5 Resource locators
//! See <https://www.w3.org/TR/css-values-3/#strings>

use crate::ParseError;
use core::fmt;
use cssparser::{Parser, serialize_string};

/// A `<url>` as written; resolution against a base URL belongs to the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url(pub String);

impl fmt::Display for Url {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("url(")?;
        serialize_string(&self.0, formatter)?;
        formatter.write_str(")")
    }
}

/// Parse `url(...)` in either the unquoted or the quoted-string form.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a URL.
pub fn parse_url(input: &mut Parser<'_, '_>) -> Result<Url, ParseError> {
    let url = input.expect_url()?;
    Ok(Url(url.as_ref().to_owned()))
}

/// Parse a quoted `<string>`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a string.
pub fn parse_string(input: &mut Parser<'_, '_>) -> Result<String, ParseError> {
    let text = input.expect_string()?;
    Ok(text.as_ref().to_owned())
}
