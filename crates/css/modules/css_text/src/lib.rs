//! CSS Text Module Level 3 — text properties, plus `text-decoration`,
//! `vertical-align`, `direction` and `unicode-bidi`.
//! See <https://www.w3.org/TR/css-text-3/>

#![forbid(unsafe_code)]

pub mod chapter_2_text_transform;
pub mod chapter_3_white_space;
pub mod chapter_7_alignment;
pub mod chapter_8_spacing;
pub mod decoration;
pub mod direction;
pub mod vertical_align;

pub use chapter_2_text_transform::TextTransform;
pub use chapter_3_white_space::WhiteSpace;
pub use chapter_7_alignment::{TextAlign, TextIndent};
pub use chapter_8_spacing::Spacing;
pub use decoration::TextDecoration;
pub use direction::{Direction, UnicodeBidi};
pub use vertical_align::VerticalAlign;
