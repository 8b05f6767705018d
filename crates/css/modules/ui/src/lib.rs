//! CSS Basic User Interface Module Level 3 — outlines and `cursor`.
//! See <https://www.w3.org/TR/css-ui-3/>

#![forbid(unsafe_code)]

pub mod chapter_5_outline;
pub mod chapter_6_cursor;

pub use chapter_5_outline::{
    Outline, OutlineColor, OutlineStyle, OutlineWidth, parse_outline_shorthand,
    parse_outline_style,
};
pub use chapter_6_cursor::{Cursor, CursorKeyword};
