//! CSS Fonts Module Level 3 — the font longhands, `line-height` and the `font` shorthand.
//! See <https://www.w3.org/TR/css-fonts-3/>

#![forbid(unsafe_code)]

pub mod chapter_3_font_family;
pub mod chapter_3_font_shorthand;
pub mod chapter_3_font_size;
pub mod chapter_3_font_style;
pub mod chapter_3_font_weight;
pub mod line_height;

pub use chapter_3_font_family::{FamilyName, FontFamily};
pub use chapter_3_font_shorthand::{FontShorthand, parse_font_shorthand};
pub use chapter_3_font_size::{AbsoluteSize, FontSize};
pub use chapter_3_font_style::{FontStyle, FontVariant};
pub use chapter_3_font_weight::FontWeight;
pub use line_height::LineHeight;
