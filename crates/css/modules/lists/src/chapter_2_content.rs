//! `content`.
//! See <https://www.w3.org/TR/CSS21/generate.html#content>

use crate::ListStyleType;
use crate::chapter_4_counters::parse_counter_name;
use core::fmt;
use css_values_units::cssparser::{Parser, Token, serialize_identifier, serialize_string};
use css_values_units::{
    ParseError, Specified, Url, inherit, parse_nested, parse_string, parse_url, try_inherit,
};

/// One component of a `content` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    String(String),
    Url(Url),
    Counter {
        name: String,
        style: ListStyleType,
    },
    Counters {
        name: String,
        separator: String,
        style: ListStyleType,
    },
    Attr(String),
    OpenQuote,
    CloseQuote,
    NoOpenQuote,
    NoCloseQuote,
}

fn parse_counter_style(input: &mut Parser<'_, '_>) -> Result<ListStyleType, ParseError> {
    if input.try_parse(|inner| inner.expect_comma()).is_ok() {
        return ListStyleType::parse_keyword(input);
    }
    Ok(ListStyleType::Decimal)
}

impl ContentItem {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(text) = input.try_parse(parse_string) {
            return Ok(Self::String(text));
        }
        if let Ok(url) = input.try_parse(parse_url) {
            return Ok(Self::Url(url));
        }
        let token = input.next()?.clone();
        match token {
            Token::Ident(name) => match name.to_ascii_lowercase().as_str() {
                "open-quote" => Ok(Self::OpenQuote),
                "close-quote" => Ok(Self::CloseQuote),
                "no-open-quote" => Ok(Self::NoOpenQuote),
                "no-close-quote" => Ok(Self::NoCloseQuote),
                _ => Err(ParseError::UnexpectedToken),
            },
            Token::Function(function) => match function.to_ascii_lowercase().as_str() {
                "counter" => parse_nested(input, |args| {
                    let name = parse_counter_name(args)?;
                    let style = parse_counter_style(args)?;
                    Ok(Self::Counter { name, style })
                }),
                "counters" => parse_nested(input, |args| {
                    let name = parse_counter_name(args)?;
                    args.expect_comma()?;
                    let separator = parse_string(args)?;
                    let style = parse_counter_style(args)?;
                    Ok(Self::Counters {
                        name,
                        separator,
                        style,
                    })
                }),
                "attr" => parse_nested(input, |args| {
                    Ok(Self::Attr(args.expect_ident()?.as_ref().to_owned()))
                }),
                _ => Err(ParseError::UnexpectedToken),
            },
            _ => Err(ParseError::UnexpectedToken),
        }
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => serialize_string(text, formatter),
            Self::Url(url) => write!(formatter, "{url}"),
            Self::Counter { name, style } => {
                formatter.write_str("counter(")?;
                serialize_identifier(name, formatter)?;
                if *style != ListStyleType::Decimal {
                    write!(formatter, ", {style}")?;
                }
                formatter.write_str(")")
            }
            Self::Counters {
                name,
                separator,
                style,
            } => {
                formatter.write_str("counters(")?;
                serialize_identifier(name, formatter)?;
                formatter.write_str(", ")?;
                serialize_string(separator, formatter)?;
                if *style != ListStyleType::Decimal {
                    write!(formatter, ", {style}")?;
                }
                formatter.write_str(")")
            }
            Self::Attr(name) => {
                formatter.write_str("attr(")?;
                serialize_identifier(name, formatter)?;
                formatter.write_str(")")
            }
            Self::OpenQuote => formatter.write_str("open-quote"),
            Self::CloseQuote => formatter.write_str("close-quote"),
            Self::NoOpenQuote => formatter.write_str("no-open-quote"),
            Self::NoCloseQuote => formatter.write_str("no-close-quote"),
        }
    }
}

/// `content`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Inherit,
    Normal,
    None,
    Items(Vec<ContentItem>),
}

impl Content {
    /// Parse `normal | none | <content-item>+ | inherit`.
    ///
    /// # Errors
    /// Returns an error for unknown items or malformed functions.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("normal"))
            .is_ok()
        {
            return Ok(Self::Normal);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("none"))
            .is_ok()
        {
            return Ok(Self::None);
        }
        let mut items = vec![ContentItem::parse(input)?];
        while !input.is_exhausted() {
            items.push(ContentItem::parse(input)?);
        }
        Ok(Self::Items(items))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for Content {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Normal => formatter.write_str("normal"),
            Self::None => formatter.write_str("none"),
            Self::Items(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(" ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                Ok(())
            }
        }
    }
}
