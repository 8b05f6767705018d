//! CSS Style Attributes — splitting a declaration block into declarations.
//! See <https://www.w3.org/TR/css-style-attr/>
//!
//! The block is tokenized with cssparser's rule-body parser, so semicolons and
//! colons inside strings, `url()` and functions never split a declaration.

#![forbid(unsafe_code)]

use cssparser::{
    AtRuleParser, BasicParseError, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, parse_important,
};

/// A single CSS declaration parsed from a declaration block.
///
/// See <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase.
    pub property: String,
    /// Raw value text without the `!important` marker, trimmed.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

impl Declaration {
    /// A normal-priority declaration.
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_ascii_lowercase(),
            value: value.trim().to_owned(),
            important: false,
        }
    }
}

/// Collects the raw value text of each declaration.
struct DeclarationCollector;

impl<'input> DeclarationParser<'input> for DeclarationCollector {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
        _declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        let mut end = start;
        let mut important = false;
        loop {
            let marker = input.try_parse(|parser| -> Result<(), BasicParseError<'input>> {
                parse_important(parser)?;
                parser.expect_exhausted()
            });
            if marker.is_ok() {
                important = true;
                break;
            }
            if input.next_including_whitespace_and_comments().is_err() {
                break;
            }
            end = input.position();
        }
        let value = input.slice(start..end).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(Declaration {
            property: name.to_ascii_lowercase(),
            value: value.to_owned(),
            important,
        })
    }
}

impl AtRuleParser<'_> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl QualifiedRuleParser<'_> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl RuleBodyItemParser<'_, Declaration, ()> for DeclarationCollector {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Parse a declaration block (the value of a `style` attribute) into declarations
/// in source order.
///
/// Items that are not `name: value` declarations, and declarations with an empty
/// value, are skipped. Duplicates are kept; the consumer applies them in order.
///
/// See <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(text: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut collector = DeclarationCollector;
    RuleBodyParser::new(&mut parser, &mut collector)
        .filter_map(|item| match item {
            Ok(declaration) => Some(declaration),
            Err((_, source)) => {
                log::debug!("style attribute: skipping malformed item {:?}", source.trim());
                None
            }
        })
        .collect()
}
