#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_lists::{Content, ContentItem, ListStyleType, Quotes};
use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{ParseError, ResourceCache, StyleConfig};

fn content(text: &str) -> Result<Content, ParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    Content::parse(&mut parser)
}

#[test]
fn mixed_items() {
    let _ = env_logger::builder().is_test(true).try_init();
    let parsed = content("open-quote \"Chapter \" counter(chapter, upper-roman) \". \" attr(title)")
        .unwrap();
    let Content::Items(items) = &parsed else {
        panic!("expected a content list, got {parsed:?}");
    };
    assert_eq!(items.len(), 5);
    assert_eq!(
        items.get(2),
        Some(&ContentItem::Counter {
            name: "chapter".to_owned(),
            style: ListStyleType::UpperRoman,
        })
    );
    assert_eq!(
        parsed.to_string(),
        "open-quote \"Chapter \" counter(chapter, upper-roman) \". \" attr(title)"
    );
}

#[test]
fn counters_require_a_separator() {
    assert_eq!(
        content("counters(item, \".\")").unwrap().to_string(),
        "counters(item, \".\")"
    );
    assert!(content("counters(item)").is_err());
    assert!(content("counter(item, bogus)").is_err());
}

#[test]
fn configured_quotes_reach_auto() {
    let resources = ResourceCache::from_config(&StyleConfig::default())
        .with_default_quotes(vec![("«".to_owned(), "»".to_owned())]);
    let mut quotes = Quotes::Auto;
    quotes.compute(None, &resources);
    assert_eq!(quotes.pair(3), Some(("«", "»")));
}
