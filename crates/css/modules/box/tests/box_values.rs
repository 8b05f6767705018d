#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_box::{MaxSize, MinSize, PaddingWidth, Size, parse_padding_shorthand};
use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{FontContext, Length, LengthUnit, ParseError, Percentage};

fn with_parser<T>(text: &str, parse: impl FnOnce(&mut Parser<'_, '_>) -> T) -> T {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse(&mut parser)
}

#[test]
fn percentage_height_against_auto_block_becomes_auto() {
    let mut height = with_parser("50%", Size::parse).unwrap();
    height.compute(None, FontContext::from_em(16.0), true);
    assert_eq!(height, Size::Auto);

    let mut width = with_parser("50%", Size::parse).unwrap();
    width.compute(None, FontContext::from_em(16.0), false);
    assert_eq!(width, Size::Percentage(Percentage(0.5)));
}

#[test]
fn negative_padding_is_rejected() {
    let result = with_parser("-1px", PaddingWidth::parse);
    assert_eq!(result, Err(ParseError::InvalidValue));
    let shorthand = with_parser("1px 2px 3px", parse_padding_shorthand).unwrap();
    assert_eq!(shorthand[3], PaddingWidth::Length(Length::px(2.0)));
}

#[test]
fn min_and_max_sizes_resolve_ex() {
    let mut min = with_parser("2ex", MinSize::parse).unwrap();
    min.compute(None, FontContext::from_em(20.0));
    assert_eq!(min, MinSize::Length(Length::computed(20.0)));

    let mut max = with_parser("none", MaxSize::parse).unwrap();
    max.compute(Some(&MaxSize::Length(Length::px(3.0))), FontContext::from_em(20.0));
    assert_eq!(max, MaxSize::None);

    let mut inherited = MaxSize::Inherit;
    let parent = MaxSize::Length(Length {
        value: 2.0,
        unit: LengthUnit::Centimeters,
    });
    inherited.compute(Some(&parent), FontContext::from_em(20.0));
    assert_eq!(inherited.to_string(), "2cm");
}
