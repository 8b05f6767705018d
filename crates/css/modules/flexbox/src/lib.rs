//! CSS Flexible Box Layout Module Level 1 — flex container and flex item properties.
//! See <https://www.w3.org/TR/css-flexbox-1/>

#![forbid(unsafe_code)]

// Chapter modules mapped to the Flexbox Level 1 table of contents.
// §5 Flex Containers: direction, wrap, flow, order
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// §7 Flexibility
#[path = "7_flexibility/mod.rs"]
mod chapter7;
// §8 Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;

pub use chapter5::{FlexDirection, FlexFlow, FlexWrap, Order, parse_flex_flow_shorthand};
pub use chapter7::{Flex, FlexBasis, FlexGrow, FlexShrink, parse_flex_shorthand};
pub use chapter8::{AlignContent, AlignItems, AlignSelf, JustifyContent};
