#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_values_units::cssparser::{Parser, ParserInput};
use css_values_units::{
    Color, ExHeight, Length, LengthUnit, ResourceCache, StyleConfig, parse_color, parse_length,
};

fn length(text: &str) -> Length {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_length(&mut parser).unwrap()
}

fn color(text: &str) -> Color {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_color(&mut parser).unwrap()
}

#[test]
fn physical_units_scale_with_configured_dpi() {
    let _ = env_logger::builder().is_test(true).try_init();
    let resources = ResourceCache::default();
    assert!((resources.length_to_px(length("1in")) - 96.0).abs() < 1e-4);
    assert!((resources.length_to_px(length("12pt")) - 16.0).abs() < 1e-4);

    let config = StyleConfig {
        dpi: 192.0,
        ..StyleConfig::default()
    };
    let hidpi = ResourceCache::from_config(&config);
    assert!((hidpi.length_to_px(length("1pc")) - 32.0).abs() < 1e-4);
    assert!((hidpi.length_to_px(length("10px")) - 10.0).abs() < 1e-4);
}

#[test]
fn medium_font_size_scales_the_keyword_table() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = StyleConfig {
        font_size_medium: 20.0,
        ..StyleConfig::default()
    };
    let resources = ResourceCache::from_config(&config);
    assert!((resources.font_sizes().medium() - 20.0).abs() < 1e-4);

    let root = resources.root_font_context();
    assert!((root.em_size - 20.0).abs() < 1e-4);
    assert!((root.ex_size - 10.0).abs() < 1e-4);
    let ex = length("2ex").compute(root);
    assert_eq!(ex.unit, LengthUnit::ComputedPx);
    assert_eq!(ex.to_string(), "20px");
}

#[test]
fn ex_from_font_metrics_when_configured() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = StyleConfig {
        ex_height: ExHeight::FontMetrics,
        ..StyleConfig::default()
    };
    let resources = ResourceCache::from_config(&config);
    let halved = resources.font_context(16.0, None);
    assert!((halved.ex_size - 8.0).abs() < 1e-4);
    let measured = resources.font_context(16.0, Some("serif"));
    assert!(measured.ex_size > 0.0);
    assert!((measured.em_size - 16.0).abs() < 1e-4);
}

#[test]
fn translucent_colors_serialize_alpha_like_other_numbers() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    let faded = Color {
        alpha: 51,
        ..Color::rgb(255, 0, 0)
    };
    assert_eq!(faded.to_string(), "rgba(255, 0, 0, 0.2)");
    assert_eq!(color("#0000ff").to_string(), "rgb(0, 0, 255)");
}
