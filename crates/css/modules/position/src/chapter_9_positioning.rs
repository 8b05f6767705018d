//! CSS 2.1 §9.3-9.9 `position`, box offsets, `float`, `clear` and `z-index`.
//! See <https://www.w3.org/TR/CSS21/visuren.html#choose-position>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, inherit, keyword_property,
    parse_integer, parse_length, parse_percentage, try_inherit,
};

keyword_property! {
    /// `position`.
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
    }
    initial = Static;
}

impl Position {
    /// Absolute and fixed boxes are taken out of flow.
    pub const fn is_absolutely_positioned(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

keyword_property! {
    /// `float`.
    pub enum Float {
        Left => "left",
        Right => "right",
        None => "none",
    }
    initial = None;
}

impl Float {
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

keyword_property! {
    /// `clear`.
    pub enum Clear {
        None => "none",
        Left => "left",
        Right => "right",
        Both => "both",
    }
    initial = None;
}

/// `z-index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZIndex {
    Inherit,
    Auto,
    Integer(i32),
}

impl ZIndex {
    /// Parse `auto | <integer> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for non-integer values.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input.try_parse(|inner| inner.expect_ident_matching("auto")).is_ok() {
            return Ok(Self::Auto);
        }
        Ok(Self::Integer(parse_integer(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for ZIndex {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for ZIndex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Integer(value) => write!(formatter, "{value}"),
        }
    }
}

/// One of `top`, `right`, `bottom`, `left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    Inherit,
    Auto,
    Length(Length),
    Percentage(Percentage),
}

impl Inset {
    /// Parse `<length> | <percentage> | auto | inherit`. Negative values are allowed.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        if input.try_parse(|inner| inner.expect_ident_matching("auto")).is_ok() {
            return Ok(Self::Auto);
        }
        if let Ok(percentage) = input.try_parse(parse_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_length(input)?))
    }

    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    fn negated(self) -> Self {
        match self {
            Self::Length(length) => Self::Length(length.negated()),
            Self::Percentage(percentage) => Self::Percentage(Percentage(-percentage.0)),
            Self::Inherit | Self::Auto => self,
        }
    }

    /// Inheritance plus `em`/`ex` resolution, without the relative-positioning step.
    fn compute_own(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Length(length) = self {
            *length = length.compute(font);
        }
    }

    /// Resolve `left` and `right` together.
    ///
    /// For relatively positioned boxes CSS 2.1 §9.4.3 ties the pair: both `auto`
    /// become `0`, one `auto` becomes the negation of the other, and when neither is
    /// `auto` the end side loses (`right` in ltr, `left` in rtl).
    /// See <https://www.w3.org/TR/CSS21/visuren.html#relative-positioning>
    pub fn compute_horizontal(
        left: &mut Self,
        right: &mut Self,
        parents: Option<(&Self, &Self)>,
        font: FontContext,
        position: Position,
        ltr: bool,
    ) {
        left.compute_own(parents.map(|(parent_left, _)| parent_left), font);
        right.compute_own(parents.map(|(_, parent_right)| parent_right), font);
        if position != Position::Relative {
            return;
        }
        match (left.is_auto(), right.is_auto()) {
            (true, true) => {
                *left = Self::Length(Length::computed(0.0));
                *right = Self::Length(Length::computed(0.0));
            }
            (true, false) => *left = right.negated(),
            (false, true) => *right = left.negated(),
            (false, false) if ltr => *right = left.negated(),
            (false, false) => *left = right.negated(),
        }
    }

    /// Resolve `top` and `bottom` together; the same rules as
    /// `compute_horizontal` with `bottom` always losing.
    pub fn compute_vertical(
        top: &mut Self,
        bottom: &mut Self,
        parents: Option<(&Self, &Self)>,
        font: FontContext,
        position: Position,
    ) {
        Self::compute_horizontal(top, bottom, parents, font, position, true);
    }
}

impl Specified for Inset {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Auto => formatter.write_str("auto"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn parse_inset(text: &str) -> Result<Inset, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        Inset::parse(&mut parser)
    }

    #[test]
    fn negative_offsets_parse() {
        assert_eq!(parse_inset("-4px"), Ok(Inset::Length(Length::px(-4.0))));
        assert_eq!(parse_inset("auto"), Ok(Inset::Auto));
        assert_eq!(parse_inset("10%"), Ok(Inset::Percentage(Percentage(0.1))));
    }

    #[test]
    fn static_boxes_keep_their_offsets() {
        let mut left = Inset::Length(Length::px(5.0));
        let mut right = Inset::Auto;
        Inset::compute_horizontal(
            &mut left,
            &mut right,
            None,
            FontContext::from_em(16.0),
            Position::Static,
            true,
        );
        assert_eq!(right, Inset::Auto);
    }

    #[test]
    fn over_constrained_rtl_drops_left() {
        let mut left = Inset::Length(Length::px(5.0));
        let mut right = Inset::Length(Length::px(7.0));
        Inset::compute_horizontal(
            &mut left,
            &mut right,
            None,
            FontContext::from_em(16.0),
            Position::Relative,
            false,
        );
        assert_eq!(left, Inset::Length(Length::px(-7.0)));
        assert_eq!(right, Inset::Length(Length::px(7.0)));
    }
}
