//! CSS 2.1 §9 Visual formatting model (positioning schemes) and §11 Visual effects.
//! See <https://www.w3.org/TR/CSS21/visuren.html> and <https://www.w3.org/TR/CSS21/visufx.html>

#![forbid(unsafe_code)]

pub mod chapter_11_visual_effects;
pub mod chapter_9_positioning;

pub use chapter_11_visual_effects::{Clip, ClipEdge, Overflow};
pub use chapter_9_positioning::{Clear, Float, Inset, Position, ZIndex};
