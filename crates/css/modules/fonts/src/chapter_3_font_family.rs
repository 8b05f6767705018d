//! §3.1 `font-family`.
//! See <https://www.w3.org/TR/css-fonts-3/#font-family-prop>

use core::fmt;
use css_values_units::cssparser::{Parser, serialize_string};
use css_values_units::{ParseError, Specified, inherit, try_inherit};

/// Identifiers that may not start an unquoted family name.
const RESERVED_NAMES: [&str; 3] = ["inherit", "initial", "default"];

/// One entry of a `font-family` list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FamilyName {
    Serif,
    SansSerif,
    Cursive,
    Fantasy,
    Monospace,
    Named(String),
}

impl FamilyName {
    fn generic(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "serif" => Some(Self::Serif),
            "sans-serif" => Some(Self::SansSerif),
            "cursive" => Some(Self::Cursive),
            "fantasy" => Some(Self::Fantasy),
            "monospace" => Some(Self::Monospace),
            _ => None,
        }
    }

    /// A quoted string, a generic keyword, or a run of identifiers joined by spaces.
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(quoted) = input.try_parse(|inner| {
            inner
                .expect_string()
                .map(|text| text.as_ref().to_owned())
        }) {
            return Ok(Self::Named(quoted));
        }
        let first = input.expect_ident()?.as_ref().to_owned();
        let mut words = vec![first];
        while let Ok(word) =
            input.try_parse(|inner| inner.expect_ident().map(|text| text.as_ref().to_owned()))
        {
            words.push(word);
        }
        if let [only] = words.as_slice() {
            if let Some(generic) = Self::generic(only) {
                return Ok(generic);
            }
            if RESERVED_NAMES
                .iter()
                .any(|reserved| only.eq_ignore_ascii_case(reserved))
            {
                return Err(ParseError::InvalidValue);
            }
        }
        Ok(Self::Named(words.join(" ")))
    }

    /// The name handed to font lookup.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Cursive => "cursive",
            Self::Fantasy => "fantasy",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for FamilyName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => serialize_string(name, formatter),
            Self::Serif | Self::SansSerif | Self::Cursive | Self::Fantasy | Self::Monospace => {
                formatter.write_str(self.as_str())
            }
        }
    }
}

/// `font-family`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontFamily {
    Inherit,
    Names(Vec<FamilyName>),
}

impl FontFamily {
    /// Parse a comma-separated family list, or `inherit`.
    ///
    /// # Errors
    /// Returns an error for empty entries or reserved names.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for empty entries or reserved names.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let mut names = Vec::new();
        loop {
            names.push(FamilyName::parse(input)?);
            if input.try_parse(|inner| inner.expect_comma()).is_err() {
                return Ok(Self::Names(names));
            }
        }
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }

    /// The preferred family, used for font-metrics lookups.
    pub fn first_name(&self) -> Option<&str> {
        match self {
            Self::Names(names) => names.first().map(FamilyName::as_str),
            Self::Inherit => None,
        }
    }
}

impl Specified for FontFamily {
    fn initial() -> Self {
        Self::Names(vec![FamilyName::SansSerif])
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Names(names) => {
                for (index, name) in names.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{name}")?;
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

    fn parse(text: &str) -> Result<FontFamily, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        FontFamily::parse(&mut parser)
    }

    #[test]
    fn unquoted_words_join_with_spaces() {
        assert_eq!(
            parse("Times  New Roman, 'Comic Sans', serif"),
            Ok(FontFamily::Names(vec![
                FamilyName::Named("Times New Roman".to_owned()),
                FamilyName::Named("Comic Sans".to_owned()),
                FamilyName::Serif,
            ]))
        );
    }

    #[test]
    fn reserved_names_are_rejected() {
        assert!(parse("initial").is_err());
        assert!(parse("Arial, default").is_err());
        assert!(parse("Arial,").is_err());
    }

    #[test]
    fn named_families_serialize_quoted() {
        let family = parse("monospace, Fira Code").unwrap_or(FontFamily::Inherit);
        assert_eq!(family.to_string(), "monospace, \"Fira Code\"");
        assert_eq!(family.first_name(), Some("monospace"));
    }
}
