#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_position::{Clear, Float, Inset, Position, ZIndex};
use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{FontContext, Length, LengthUnit};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn relative_auto_pair_becomes_zero() {
    init_logger();
    let mut top = Inset::Auto;
    let mut bottom = Inset::Auto;
    Inset::compute_vertical(
        &mut top,
        &mut bottom,
        None,
        FontContext::from_em(16.0),
        Position::Relative,
    );
    assert_eq!(top, Inset::Length(Length::computed(0.0)));
    assert_eq!(bottom, Inset::Length(Length::computed(0.0)));
}

#[test]
fn relative_single_offset_mirrors_in_pixels() {
    init_logger();
    let mut left = Inset::Length(Length {
        value: 2.0,
        unit: LengthUnit::Ems,
    });
    let mut right = Inset::Auto;
    Inset::compute_horizontal(
        &mut left,
        &mut right,
        None,
        FontContext::from_em(10.0),
        Position::Relative,
        true,
    );
    assert_eq!(left, Inset::Length(Length::computed(20.0)));
    assert_eq!(right, Inset::Length(Length::computed(-20.0)));
}

#[test]
fn inherited_offsets_copy_the_parent_pair() {
    init_logger();
    let parent_top = Inset::Length(Length::computed(4.0));
    let parent_bottom = Inset::Length(Length::computed(-4.0));
    let mut top = Inset::Inherit;
    let mut bottom = Inset::Inherit;
    Inset::compute_vertical(
        &mut top,
        &mut bottom,
        Some((&parent_top, &parent_bottom)),
        FontContext::from_em(16.0),
        Position::Relative,
    );
    assert_eq!(top, parent_top);
    assert_eq!(bottom, parent_bottom);
}

#[test]
fn keywords_and_z_index() {
    init_logger();
    let mut input = ParserInput::new("-3");
    let mut parser = Parser::new(&mut input);
    assert_eq!(ZIndex::parse(&mut parser).unwrap(), ZIndex::Integer(-3));

    let mut input = ParserInput::new("both");
    let mut parser = Parser::new(&mut input);
    assert_eq!(Clear::parse(&mut parser).unwrap(), Clear::Both);

    assert!(Float::Left.is_floating());
    assert!(Position::Fixed.is_absolutely_positioned());
    assert_eq!(Position::Absolute.to_string(), "absolute");
}
