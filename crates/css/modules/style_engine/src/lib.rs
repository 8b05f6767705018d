//! Computed style for a tree of boxes.
//! See <https://www.w3.org/TR/CSS21/cascade.html>
//!
//! Each element's declarations are cascaded into a fresh `BoxProperties`, then
//! resolved against the parent's computed values, root first.

#![forbid(unsafe_code)]

mod compute;
mod context;
mod tree;

pub use compute::ComputeStyle;
pub use context::ComputeContext;
pub use tree::{BoxNode, ComputeState, Element, StyleTree};
