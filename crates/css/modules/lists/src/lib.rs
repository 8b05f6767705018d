//! CSS Lists and Counters, and Generated Content — list markers, `content`,
//! `quotes` and the counter properties.
//! See <https://www.w3.org/TR/CSS21/generate.html>

#![forbid(unsafe_code)]

pub mod chapter_2_content;
pub mod chapter_3_quotes;
pub mod chapter_4_counters;
pub mod list_style;

pub use chapter_2_content::{Content, ContentItem};
pub use chapter_3_quotes::Quotes;
pub use chapter_4_counters::{CounterChange, CounterList};
pub use list_style::{
    ListStyle, ListStyleImage, ListStylePosition, ListStyleType, parse_list_style_shorthand,
};
