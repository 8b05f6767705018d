#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    reason = "tests"
)]

use css_cascade::{BoxProperties, PropertyParsers};
use css_values_units::{Color, ResourceCache};
use style_engine::{BoxNode, ComputeContext, ComputeState, ComputeStyle as _, Element, StyleTree};

/// Cascade `style` into a fresh aggregate and compute it under `parent`.
fn computed_style(
    registry: &PropertyParsers,
    resources: &ResourceCache,
    style: &str,
    parent: Option<&BoxProperties>,
) -> BoxProperties {
    let mut properties = BoxProperties::default();
    registry.apply_style(&mut properties, style, None);
    let context = parent.map_or_else(ComputeContext::root, ComputeContext::for_children);
    properties.compute(parent, resources, context);
    properties
}

const PARENT_STYLE: &str = "font: italic bold 20px/1.5 serif; color: navy; direction: rtl; \
    position: relative; left: 4px; height: 50%; margin: 1em 10%; border: thick dashed; \
    text-indent: 2ex; quotes: '<' '>'; list-style: square inside; border-spacing: 1em; \
    visibility: hidden; white-space: pre; display: inline-block; -clan-box-direction: vertical";

fn sample_tree() -> Element {
    Element::with_style("div", "font-size: 20px; color: red; direction: rtl").with_child(
        Element::with_style("p", "font-size: 150%; margin-left: 1em")
            .with_child(Element::with_style("span", "line-height: 1.5"))
            .with_child("some text"),
    )
}

#[test]
fn percentage_font_size_and_line_height_chain() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut tree = StyleTree::new(sample_tree(), &registry);
    assert_eq!(tree.compute(&ResourceCache::default()).unwrap(), 3);

    let paragraph = tree.element_at(&[0]).unwrap().computed().unwrap();
    assert_eq!(paragraph.font_size.px(), Some(30.0));
    assert_eq!(paragraph.margin_left.to_string(), "30px");

    let span = tree.element_at(&[0, 0]).unwrap().computed().unwrap();
    assert_eq!(span.font_size.px(), Some(30.0));
    assert_eq!(span.line_height.to_string(), "45px");
}

#[test]
fn inherited_properties_flow_down_and_reset_ones_do_not() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let root = Element::new("div")
        .declare("color", "rgb(0, 128, 0)")
        .declare("background-color", "yellow")
        .with_child(Element::new("em"));
    let mut tree = StyleTree::new(root, &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let child = tree.element_at(&[0]).unwrap().computed().unwrap();
    assert_eq!(child.color.to_string(), "rgb(0, 128, 0)");
    assert_eq!(child.border_top_color.to_string(), "rgb(0, 128, 0)");
    assert_eq!(child.background_color.color(), Color::TRANSPARENT);
}

#[test]
fn root_uses_configured_defaults() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut tree = StyleTree::new(Element::new("html"), &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let root = tree.root_element().unwrap().computed().unwrap();
    assert_eq!(root.font_size.px(), Some(16.0));
    assert_eq!(root.color.to_string(), "rgb(0, 0, 0)");
    assert_eq!(root.border_left_width.to_string(), "0");
}

#[test]
fn computing_twice_gives_the_same_values() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let resources = ResourceCache::default();
    let mut tree = StyleTree::new(sample_tree(), &registry);
    tree.compute(&resources).unwrap();
    let first = tree.dump().unwrap();
    tree.compute(&resources).unwrap();
    assert_eq!(tree.dump().unwrap(), first);
}

#[test]
fn computing_an_already_computed_style_changes_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let resources = ResourceCache::default();
    let parent = computed_style(&registry, &resources, PARENT_STYLE, None);
    let mut child = computed_style(
        &registry,
        &resources,
        "font-size: 150%; width: 50%; height: 25%; right: 1em; float: left; \
         outline: solid; vertical-align: 10%; line-height: 120%",
        Some(&parent),
    );
    let first = child.dump();
    child.compute(Some(&parent), &resources, ComputeContext::for_children(&parent));
    assert_eq!(child.dump(), first);

    let mut root = parent.clone();
    root.compute(None, &resources, ComputeContext::root());
    assert_eq!(root, parent);
}

#[test]
fn explicit_inherit_copies_every_parent_value() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let resources = ResourceCache::default();
    let parent = computed_style(&registry, &resources, PARENT_STYLE, None);
    let all_inherit = BoxProperties::LONGHANDS
        .iter()
        .map(|name| format!("{name}: inherit"))
        .collect::<Vec<_>>()
        .join("; ");
    let child = computed_style(&registry, &resources, &all_inherit, Some(&parent));

    let mismatches: Vec<_> = parent
        .entries()
        .into_iter()
        .zip(child.entries())
        .filter(|(expected, actual)| expected != actual)
        .collect();
    assert!(mismatches.is_empty(), "{mismatches:?}");
    assert_eq!(child.clan_box().direction.to_string(), "vertical");
}

#[test]
fn outline_width_depends_on_outline_style() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let root = Element::with_style("div", "outline-width: thick")
        .with_child(Element::with_style("a", "outline: solid thick"));
    let mut tree = StyleTree::new(root, &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let root_style = tree.root_element().unwrap().computed().unwrap();
    assert_eq!(root_style.outline_width.to_string(), "0");
    let link = tree.element_at(&[0]).unwrap().computed().unwrap();
    assert_eq!(link.outline_width.to_string(), "5px");
}

#[test]
fn invalid_shorthand_leaves_earlier_values() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let root = Element::with_style(
        "div",
        "border-top-style: dotted; border: 1px solid red green; width: 10px; width: 20px",
    );
    let mut tree = StyleTree::new(root, &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let style = tree.root_element().unwrap().computed().unwrap();
    assert_eq!(style.border_top_style.to_string(), "dotted");
    assert_eq!(style.border_right_style.to_string(), "none");
    assert_eq!(style.width.to_string(), "20px");
}

#[test]
fn relative_offsets_follow_the_containing_block_direction() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let offsets = "position: relative; left: 10px; right: 20px";
    let root = Element::with_style("div", &format!("{offsets}; direction: rtl"))
        .with_child(Element::with_style("span", offsets));
    let mut tree = StyleTree::new(root, &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let root_style = tree.root_element().unwrap().computed().unwrap();
    assert_eq!(root_style.left.to_string(), "10px");
    assert_eq!(root_style.right.to_string(), "-10px");
    let child = tree.element_at(&[0]).unwrap().computed().unwrap();
    assert_eq!(child.left.to_string(), "-20px");
    assert_eq!(child.right.to_string(), "20px");
}

#[test]
fn percentage_height_in_auto_height_block_is_auto() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let root = Element::with_style("div", "height: 50%")
        .with_child(Element::with_style("div", "height: 50%").with_child(Element::new("div")))
        .with_child(Element::new("div").with_child(Element::with_style("div", "height: 50%")));
    let mut tree = StyleTree::new(root, &registry);
    tree.compute(&ResourceCache::default()).unwrap();

    let root_style = tree.root_element().unwrap().computed().unwrap();
    assert_eq!(root_style.height.to_string(), "50%");
    let definite = tree.element_at(&[0]).unwrap().computed().unwrap();
    assert_eq!(definite.height.to_string(), "50%");
    let under_auto = tree.element_at(&[1, 0]).unwrap().computed().unwrap();
    assert_eq!(under_auto.height.to_string(), "auto");
}

#[test]
fn computed_style_requires_a_compute_pass() {
    let _ = env_logger::builder().is_test(true).try_init();
    let element = Element::with_style("div", "color: red");
    assert_eq!(element.state(), ComputeState::Uncomputed);
    let error = element.computed().unwrap_err();
    assert!(error.to_string().contains("<div>"));

    let registry = PropertyParsers::build();
    let tree = StyleTree::new(element, &registry);
    assert!(tree.dump().unwrap_err().to_string().contains("no computed style"));
}

#[test]
fn text_root_is_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = PropertyParsers::build();
    let mut tree = StyleTree::new(BoxNode::Text("loose".to_owned()), &registry);
    let error = tree.compute(&ResourceCache::default()).unwrap_err();
    assert!(error.to_string().contains("must be an element"));
    assert!(tree.root_element().is_none());
}
