//! CSS Display — the `display` property and `visibility`.
//! See <https://www.w3.org/TR/CSS21/visuren.html#display-prop>
//!
//! `display` carries the CSS 2.1 keywords plus the `flex`/`inline-flex` pair from
//! CSS Flexbox. Its computed value depends on `position` and `float` (§9.7).

#![forbid(unsafe_code)]

pub mod chapter_2_display_type;
pub mod chapter_4_visibility;

pub use chapter_2_display_type::Display;
pub use chapter_4_visibility::Visibility;
