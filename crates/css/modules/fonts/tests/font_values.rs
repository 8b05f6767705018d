#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_fonts::{FontFamily, FontSize, FontWeight, LineHeight, parse_font_shorthand};
use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{Length, ParseError, ResourceCache};

fn parse_with<T>(
    text: &str,
    parse: impl FnOnce(&mut Parser<'_, '_>) -> Result<T, ParseError>,
) -> T {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value = parse(&mut parser).unwrap();
    parser.expect_exhausted().unwrap();
    value
}

#[test]
fn percentage_size_then_number_line_height() {
    let _ = env_logger::builder().is_test(true).try_init();
    let resources = ResourceCache::default();

    let mut parent_size = parse_with("20px", FontSize::parse);
    parent_size.compute(None, &resources, resources.root_font_context());
    assert_eq!(parent_size.px(), Some(20.0));

    let mut child_size = parse_with("150%", FontSize::parse);
    let parent_font = resources.font_context(20.0, None);
    child_size.compute(Some(&parent_size), &resources, parent_font);
    assert_eq!(child_size.px(), Some(30.0));

    let mut line_height = parse_with("1.5", LineHeight::parse);
    line_height.compute(None, resources.font_context(30.0, None));
    assert_eq!(line_height, LineHeight::Length(Length::computed(45.0)));
}

#[test]
fn inherited_size_is_not_rescaled() {
    let resources = ResourceCache::default();
    let parent = FontSize::Length(Length::computed(30.0));
    let mut child = FontSize::Inherit;
    child.compute(Some(&parent), &resources, resources.font_context(30.0, None));
    assert_eq!(child, parent);
    child.compute(Some(&parent), &resources, resources.font_context(30.0, None));
    assert_eq!(child.px(), Some(30.0));
}

#[test]
fn bolder_chain_saturates() {
    let mut weight = FontWeight::Weight(400);
    for expected in [700, 900, 900] {
        let parent = weight;
        let mut child = FontWeight::Bolder;
        child.compute(Some(&parent));
        assert_eq!(child, FontWeight::Weight(expected));
        weight = child;
    }
}

#[test]
fn shorthand_longhands_compute() {
    let resources = ResourceCache::default();
    let mut font = parse_with("bold 2em/120% \"Fira Sans\", sans-serif", parse_font_shorthand);
    let root = resources.root_font_context();
    font.size.compute(None, &resources, root);
    assert_eq!(font.size.px(), Some(32.0));
    font.line_height
        .compute(None, resources.font_context(32.0, font.family.first_name()));
    assert_eq!(font.line_height.to_string(), "38.4px");
    font.weight.compute(None);
    assert_eq!(font.weight.value(), 700);
    font.family.compute(None);
    assert_eq!(font.family.first_name(), Some("Fira Sans"));
    assert_ne!(font.family, FontFamily::Inherit);
}
