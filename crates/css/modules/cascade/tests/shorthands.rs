#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_cascade::{BoxProperties, PropertyParsers, PropertyValue};

fn names(values: &[PropertyValue]) -> Vec<&'static str> {
    values.iter().map(PropertyValue::name).collect()
}

fn serialized(values: &[PropertyValue]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn background_emits_all_eight_longhands_in_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let values = registry.parse("background", "url(a.png) no-repeat red");
    assert_eq!(
        names(&values),
        [
            "background-color",
            "background-image",
            "background-repeat",
            "background-attachment",
            "background-position",
            "background-origin",
            "background-clip",
            "background-size",
        ]
    );
    assert_eq!(values.first().unwrap().to_string(), "rgb(255, 0, 0)");
}

#[test]
fn background_inherit_expands_to_inherit_everywhere() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let values = registry.parse("background", "inherit");
    assert_eq!(values.len(), 8);
    assert!(serialized(&values).iter().all(|text| text == "inherit"));
}

#[test]
fn font_shorthand_sets_six_longhands() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let values = registry.parse("font", "italic bold 12px/1.5 Arial, serif");
    assert_eq!(
        names(&values),
        [
            "font-style",
            "font-variant",
            "font-weight",
            "font-size",
            "line-height",
            "font-family",
        ]
    );
    assert!(registry.parse("font", "bold").is_empty());
}

#[test]
fn border_resets_omitted_parts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let values = registry.parse("border-top", "dashed");
    assert_eq!(
        serialized(&values),
        ["medium", "dashed", "currentcolor"]
    );
    assert_eq!(registry.parse("border", "1px solid red").len(), 12);
}

#[test]
fn box_edges_expand_from_one_to_four_values() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let values = registry.parse("margin", "1px 2px 3px");
    assert_eq!(
        names(&values),
        ["margin-top", "margin-right", "margin-bottom", "margin-left"]
    );
    assert_eq!(serialized(&values), ["1px", "2px", "3px", "2px"]);
    assert!(registry.parse("padding", "1px 2px 3px 4px 5px").is_empty());
    assert!(registry.parse("padding", "-1px").is_empty());
}

#[test]
fn malformed_shorthand_leaves_every_longhand_untouched() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut properties = BoxProperties::default();
    let applied = registry.apply_style(&mut properties, "border: 1px solid red green", None);
    assert_eq!(applied, 0);
    assert_eq!(properties, BoxProperties::default());
}

#[test]
fn later_declarations_win() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut properties = BoxProperties::default();
    registry.apply_style(
        &mut properties,
        "margin: 1px; margin-top: 5px; width: 10px; width: 20px",
        None,
    );
    assert_eq!(properties.margin_top.to_string(), "5px");
    assert_eq!(properties.margin_left.to_string(), "1px");
    assert_eq!(properties.width.to_string(), "20px");
}

#[test]
fn important_declarations_are_applied_last() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut properties = BoxProperties::default();
    registry.apply_style(&mut properties, "color: red !important; color: blue", None);
    assert_eq!(properties.color.to_string(), "rgb(255, 0, 0)");
}

#[test]
fn flex_and_list_style_shorthands() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    assert_eq!(
        names(&registry.parse("flex", "none")),
        ["flex-grow", "flex-shrink", "flex-basis"]
    );
    assert_eq!(
        names(&registry.parse("flex-flow", "wrap column")),
        ["flex-direction", "flex-wrap"]
    );
    let list = registry.parse("list-style", "none inside");
    assert_eq!(serialized(&list), ["none", "inside", "none"]);
}

#[test]
fn background_with_two_images_in_one_layer_is_dropped() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let malformed = "url(x.png) url(y.png) no-repeat no-repeat no-repeat";
    assert!(registry.parse("background", malformed).is_empty());

    let mut properties = BoxProperties::default();
    let applied = registry.apply_style(
        &mut properties,
        &format!("background-color: red; background-repeat: repeat-x; background: {malformed}"),
        None,
    );
    assert_eq!(applied, 2);
    assert_eq!(properties.background_color.to_string(), "rgb(255, 0, 0)");
    assert_eq!(properties.background_repeat.to_string(), "repeat-x");
}

#[test]
fn clan_box_longhands_are_registered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let direction = registry.parse("-clan-box-direction", "vertical");
    assert_eq!(names(&direction), ["-clan-box-direction"]);
    assert_eq!(serialized(&direction), ["vertical"]);

    let mut properties = BoxProperties::default();
    registry.apply_style(
        &mut properties,
        "-CLAN-BOX-WIDTH-EXPAND-FACTOR: 2; -clan-box-height-shrink-factor: auto; \
         -clan-box-width-shrink-factor: -1",
        None,
    );
    let clan_box = properties.clan_box();
    assert_eq!(clan_box.width_expand_factor.to_string(), "2");
    assert_eq!(clan_box.height_shrink_factor.to_string(), "auto");
    assert_eq!(clan_box.width_shrink_factor.to_string(), "auto");
    assert_eq!(clan_box.direction.to_string(), "horizontal");
}
