//! CSS 2.1 box model — margins, padding, and the sizing properties.
//! See <https://www.w3.org/TR/CSS21/box.html> and <https://www.w3.org/TR/CSS21/visudet.html>

#![forbid(unsafe_code)]

pub mod chapter_10_sizes;
pub mod chapter_8_margins;
pub mod chapter_8_padding;
pub mod clan_box;

pub use chapter_10_sizes::{MaxSize, MinSize, Size};
pub use chapter_8_margins::{MarginWidth, parse_margin_shorthand};
pub use chapter_8_padding::{PaddingWidth, parse_padding_shorthand};
pub use clan_box::{ClanBoxDirection, ClanBoxSizingFactor};
