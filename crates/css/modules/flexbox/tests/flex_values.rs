#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_flexbox::{
    AlignContent, FlexBasis, FlexDirection, FlexGrow, JustifyContent, Order,
    parse_flex_shorthand,
};
use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{FontContext, Length};

#[test]
fn flex_shorthand_basis_resolves_em() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut input = ParserInput::new("3 2em");
    let mut parser = Parser::new(&mut input);
    let mut flex = parse_flex_shorthand(&mut parser).unwrap();
    assert_eq!(flex.grow, FlexGrow::Factor(3.0));
    assert_eq!(flex.shrink.factor(), 1.0);
    flex.basis.compute(None, FontContext::from_em(10.0));
    assert_eq!(flex.basis, FlexBasis::Length(Length::computed(20.0)));
}

#[test]
fn container_keywords() {
    let mut input = ParserInput::new("-2");
    let mut parser = Parser::new(&mut input);
    assert_eq!(Order::parse(&mut parser).unwrap().key(), -2);
    assert_eq!(
        JustifyContent::from_keyword("space-between"),
        Some(JustifyContent::SpaceBetween)
    );
    assert_eq!(AlignContent::Stretch.to_string(), "stretch");
    let mut direction = FlexDirection::Inherit;
    direction.compute(Some(&FlexDirection::Column));
    assert!(direction.is_column());
}
