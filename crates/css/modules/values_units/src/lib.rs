//! CSS Values and Units Module Level 3 — Property definition syntax and unit types.
//! See <https://www.w3.org/TR/css-values-3/>
//!
//! Besides the value types shared by every property crate, this crate owns the
//! resource environment (`ResourceCache`) that computed values are resolved against,
//! and the `Specified` contract implemented by every property value.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the css-values table of contents.
pub mod chapter_3_identifiers;
pub mod chapter_3_strings;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_9_colors;

pub mod parsing;
pub mod resources;
pub mod specified;

use core::error::Error;
use core::fmt;
use cssparser::{BasicParseError, BasicParseErrorKind, ParseError as CssParseError, ParseErrorKind};

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{Ident, parse_ident, try_inherit};
pub use chapter_3_strings::{Url, parse_string, parse_url};
pub use chapter_4_numbers::{
    Number, parse_integer, parse_non_negative_number, parse_number, serialize_number,
};
pub use chapter_5_percentages::{Percentage, parse_non_negative_percentage, parse_percentage};
pub use chapter_6_dimensions::{
    FontContext, Length, LengthUnit, parse_length, parse_non_negative_length,
};
pub use chapter_9_colors::{Color, parse_color};
pub use parsing::{parse_nested, parse_sides};
pub use resources::{
    ExHeight, FontMetrics, FontMetricsSource, FontSizeTable, ResourceCache, StyleConfig,
};
pub use specified::{Specified, inherit};

/// Re-exported so `keyword_property!` expansions resolve the parser type.
pub use cssparser;

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The token stream ended before the grammar was satisfied.
    EndOfInput,
    /// The token had the right shape but an out-of-range value (e.g. a negative padding).
    InvalidValue,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::EndOfInput => formatter.write_str("unexpected end of input"),
            Self::InvalidValue => formatter.write_str("value out of range"),
        }
    }
}

impl Error for ParseError {}

impl From<BasicParseError<'_>> for ParseError {
    fn from(error: BasicParseError<'_>) -> Self {
        match error.kind {
            BasicParseErrorKind::EndOfInput => Self::EndOfInput,
            _ => Self::UnexpectedToken,
        }
    }
}

impl From<CssParseError<'_, Self>> for ParseError {
    fn from(error: CssParseError<'_, Self>) -> Self {
        match error.kind {
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => Self::EndOfInput,
            ParseErrorKind::Basic(_) => Self::UnexpectedToken,
            ParseErrorKind::Custom(custom) => custom,
        }
    }
}
