//! CSS Cascading and Inheritance Level 4 — declared values to per-box property slots.
//! See <https://www.w3.org/TR/css-cascade-4/>
//!
//! `PropertyParsers` turns a `name: value` declaration into longhand
//! `PropertyValue`s (expanding shorthands), and `BoxProperties` holds one slot per
//! longhand. Declarations are applied in the order they arrive; the last one wins.

#![forbid(unsafe_code)]

pub mod groups;
pub mod properties;
pub mod registry;

pub use groups::{
    BackgroundValues, BorderValues, BoxModelValues, ClanBoxValues, Corners, FlexValues, FontValues,
    ListValues, MiscValues, OutlineValues, Sides, TableValues, TextValues,
};
pub use properties::{BoxProperties, PropertyValue};
pub use registry::{ChangeSet, PropertyParser, PropertyParsers};

/// Re-exported so callers can build declarations without a direct dependency.
pub use css_style_attr::Declaration;
