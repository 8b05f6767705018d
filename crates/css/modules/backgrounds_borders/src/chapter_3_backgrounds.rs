//! §3 Backgrounds — the eight `background-*` longhands.
//! See <https://www.w3.org/TR/css-backgrounds-3/#backgrounds>
//!
//! Every longhand except `background-color` holds one entry per comma-separated
//! layer. Layer lists are kept as parsed; they are not truncated or repeated to
//! match `background-image`.

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    Color, FontContext, Length, ParseError, Percentage, Specified, Url, inherit, parse_color,
    parse_length, parse_non_negative_length, parse_non_negative_percentage, parse_percentage,
    parse_url, try_inherit,
};
use smallvec::SmallVec;

/// Per-layer values; almost every element has exactly one background layer.
pub type Layers<T> = SmallVec<T, 1>;

fn single<T>(value: T) -> Layers<T> {
    let mut layers = Layers::new();
    layers.push(value);
    layers
}

/// Parse a comma-separated list of at least one item.
fn parse_layers<T>(
    input: &mut Parser<'_, '_>,
    mut parse_item: impl FnMut(&mut Parser<'_, '_>) -> Result<T, ParseError>,
) -> Result<Layers<T>, ParseError> {
    let mut layers = Layers::new();
    loop {
        layers.push(parse_item(input)?);
        if input.try_parse(|inner| inner.expect_comma()).is_err() {
            return Ok(layers);
        }
    }
}

fn write_layers<T: fmt::Display>(
    formatter: &mut fmt::Formatter<'_>,
    layers: &Layers<T>,
) -> fmt::Result {
    for (index, layer) in layers.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{layer}")?;
    }
    Ok(())
}

fn keyword(input: &mut Parser<'_, '_>, name: &str) -> bool {
    input
        .try_parse(|inner| inner.expect_ident_matching(name))
        .is_ok()
}

/// Implements `Specified` and `Display` for the layered longhands.
macro_rules! layered_property {
    ($name:ident, $initial:expr) => {
        impl Specified for $name {
            fn initial() -> Self {
                Self::Layers(single($initial))
            }

            fn is_inherit(&self) -> bool {
                matches!(self, Self::Inherit)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Inherit => formatter.write_str("inherit"),
                    Self::Layers(layers) => write_layers(formatter, layers),
                }
            }
        }
    };
}

/// `background-color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundColor {
    Inherit,
    Color(Color),
}

impl BackgroundColor {
    /// Parse `<color> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for non-colors.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Color(parse_color(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }

    /// The color, transparent while still `inherit`.
    pub const fn color(&self) -> Color {
        match self {
            Self::Inherit => Color::TRANSPARENT,
            Self::Color(color) => *color,
        }
    }
}

impl Specified for BackgroundColor {
    fn initial() -> Self {
        Self::Color(Color::TRANSPARENT)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Color(color) => write!(formatter, "{color}"),
        }
    }
}

/// One layer of `background-image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerImage {
    None,
    Url(Url),
}

impl LayerImage {
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if keyword(input, "none") {
            return Ok(Self::None);
        }
        Ok(Self::Url(parse_url(input)?))
    }
}

impl fmt::Display for LayerImage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("none"),
            Self::Url(url) => write!(formatter, "{url}"),
        }
    }
}

/// `background-image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundImage {
    Inherit,
    Layers(Layers<LayerImage>),
}

impl BackgroundImage {
    /// Parse `[none | <url>]#  | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, LayerImage::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

layered_property!(BackgroundImage, LayerImage::None);

/// Tiling along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatStyle {
    Repeat,
    NoRepeat,
    Space,
    Round,
}

impl RepeatStyle {
    fn from_keyword(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "repeat" => Some(Self::Repeat),
            "no-repeat" => Some(Self::NoRepeat),
            "space" => Some(Self::Space),
            "round" => Some(Self::Round),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Repeat => "repeat",
            Self::NoRepeat => "no-repeat",
            Self::Space => "space",
            Self::Round => "round",
        }
    }
}

/// One layer of `background-repeat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerRepeat {
    pub horizontal: RepeatStyle,
    pub vertical: RepeatStyle,
}

impl LayerRepeat {
    pub const REPEAT: Self = Self {
        horizontal: RepeatStyle::Repeat,
        vertical: RepeatStyle::Repeat,
    };

    /// `repeat-x | repeat-y | <repeat-style>{1,2}`.
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let first = input.expect_ident()?.clone();
        if first.eq_ignore_ascii_case("repeat-x") {
            return Ok(Self {
                horizontal: RepeatStyle::Repeat,
                vertical: RepeatStyle::NoRepeat,
            });
        }
        if first.eq_ignore_ascii_case("repeat-y") {
            return Ok(Self {
                horizontal: RepeatStyle::NoRepeat,
                vertical: RepeatStyle::Repeat,
            });
        }
        let horizontal = RepeatStyle::from_keyword(&first).ok_or(ParseError::UnexpectedToken)?;
        let vertical = input
            .try_parse(|inner| {
                let second = inner.expect_ident()?.clone();
                RepeatStyle::from_keyword(&second).ok_or(ParseError::UnexpectedToken)
            })
            .unwrap_or(horizontal);
        Ok(Self {
            horizontal,
            vertical,
        })
    }
}

impl fmt::Display for LayerRepeat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.horizontal, self.vertical) {
            (RepeatStyle::Repeat, RepeatStyle::NoRepeat) => formatter.write_str("repeat-x"),
            (RepeatStyle::NoRepeat, RepeatStyle::Repeat) => formatter.write_str("repeat-y"),
            (horizontal, vertical) if horizontal == vertical => {
                formatter.write_str(horizontal.as_str())
            }
            (horizontal, vertical) => {
                write!(formatter, "{} {}", horizontal.as_str(), vertical.as_str())
            }
        }
    }
}

/// `background-repeat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundRepeat {
    Inherit,
    Layers(Layers<LayerRepeat>),
}

impl BackgroundRepeat {
    /// Parse a comma list of repeat layers, or `inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, LayerRepeat::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

layered_property!(BackgroundRepeat, LayerRepeat::REPEAT);

/// One layer of `background-attachment`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attachment {
    Scroll,
    Fixed,
}

impl Attachment {
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let name = input.expect_ident()?;
        if name.eq_ignore_ascii_case("scroll") {
            Ok(Self::Scroll)
        } else if name.eq_ignore_ascii_case("fixed") {
            Ok(Self::Fixed)
        } else {
            Err(ParseError::UnexpectedToken)
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Scroll => "scroll",
            Self::Fixed => "fixed",
        })
    }
}

/// `background-attachment`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundAttachment {
    Inherit,
    Layers(Layers<Attachment>),
}

impl BackgroundAttachment {
    /// Parse `[scroll | fixed]# | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, Attachment::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

layered_property!(BackgroundAttachment, Attachment::Scroll);

/// Horizontal component of a background position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
    Length(Length),
    Percentage(Percentage),
}

/// Vertical component of a background position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalPosition {
    Top,
    Center,
    Bottom,
    Length(Length),
    Percentage(Percentage),
}

/// One position token before axis assignment.
#[derive(Clone, Copy)]
enum PositionToken {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    Length(Length),
    Percentage(Percentage),
}

impl PositionToken {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(percentage) = input.try_parse(parse_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        if let Ok(length) = input.try_parse(parse_length) {
            return Ok(Self::Length(length));
        }
        let name = input.expect_ident()?;
        match name.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "center" => Ok(Self::Center),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    const fn horizontal(self) -> Option<HorizontalPosition> {
        match self {
            Self::Left => Some(HorizontalPosition::Left),
            Self::Right => Some(HorizontalPosition::Right),
            Self::Center => Some(HorizontalPosition::Center),
            Self::Length(length) => Some(HorizontalPosition::Length(length)),
            Self::Percentage(percentage) => Some(HorizontalPosition::Percentage(percentage)),
            Self::Top | Self::Bottom => None,
        }
    }

    const fn vertical(self) -> Option<VerticalPosition> {
        match self {
            Self::Top => Some(VerticalPosition::Top),
            Self::Bottom => Some(VerticalPosition::Bottom),
            Self::Center => Some(VerticalPosition::Center),
            Self::Length(length) => Some(VerticalPosition::Length(length)),
            Self::Percentage(percentage) => Some(VerticalPosition::Percentage(percentage)),
            Self::Left | Self::Right => None,
        }
    }

    const fn is_keyword(self) -> bool {
        !matches!(self, Self::Length(_) | Self::Percentage(_))
    }
}

/// One layer of `background-position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPosition {
    pub horizontal: HorizontalPosition,
    pub vertical: VerticalPosition,
}

impl LayerPosition {
    pub const TOP_LEFT: Self = Self {
        horizontal: HorizontalPosition::Percentage(Percentage(0.0)),
        vertical: VerticalPosition::Percentage(Percentage(0.0)),
    };

    /// One or two of keyword/length/percentage.
    ///
    /// A single value sets one axis and centers the other. With two values the
    /// first is horizontal unless keywords say otherwise (`top left`).
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let first = PositionToken::parse(input)?;
        let Ok(second) = input.try_parse(PositionToken::parse) else {
            return Ok(match first {
                PositionToken::Top | PositionToken::Bottom => Self {
                    horizontal: HorizontalPosition::Center,
                    vertical: first.vertical().ok_or(ParseError::InvalidValue)?,
                },
                _ => Self {
                    horizontal: first.horizontal().ok_or(ParseError::InvalidValue)?,
                    vertical: VerticalPosition::Center,
                },
            });
        };
        let swapped = matches!(first, PositionToken::Top | PositionToken::Bottom)
            || matches!(second, PositionToken::Left | PositionToken::Right);
        let (horizontal_token, vertical_token) = if swapped {
            if !first.is_keyword() || !second.is_keyword() {
                return Err(ParseError::InvalidValue);
            }
            (second, first)
        } else {
            (first, second)
        };
        Ok(Self {
            horizontal: horizontal_token
                .horizontal()
                .ok_or(ParseError::InvalidValue)?,
            vertical: vertical_token.vertical().ok_or(ParseError::InvalidValue)?,
        })
    }

    fn compute(&mut self, font: FontContext) {
        if let HorizontalPosition::Length(length) = &mut self.horizontal {
            *length = length.compute(font);
        }
        if let VerticalPosition::Length(length) = &mut self.vertical {
            *length = length.compute(font);
        }
    }
}

impl fmt::Display for LayerPosition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.horizontal {
            HorizontalPosition::Left => formatter.write_str("left")?,
            HorizontalPosition::Center => formatter.write_str("center")?,
            HorizontalPosition::Right => formatter.write_str("right")?,
            HorizontalPosition::Length(length) => write!(formatter, "{length}")?,
            HorizontalPosition::Percentage(percentage) => write!(formatter, "{percentage}")?,
        }
        match self.vertical {
            VerticalPosition::Top => formatter.write_str(" top"),
            VerticalPosition::Center => formatter.write_str(" center"),
            VerticalPosition::Bottom => formatter.write_str(" bottom"),
            VerticalPosition::Length(length) => write!(formatter, " {length}"),
            VerticalPosition::Percentage(percentage) => write!(formatter, " {percentage}"),
        }
    }
}

/// `background-position`.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundPosition {
    Inherit,
    Layers(Layers<LayerPosition>),
}

impl BackgroundPosition {
    /// Parse a comma list of positions, or `inherit`.
    ///
    /// # Errors
    /// Returns an error for malformed or contradictory positions (`left right`).
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, LayerPosition::parse)?))
    }

    /// Resolve `em`/`ex` in every layer.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Layers(layers) = self {
            for layer in layers.iter_mut() {
                layer.compute(font);
            }
        }
    }
}

layered_property!(BackgroundPosition, LayerPosition::TOP_LEFT);

/// The box a background is positioned in or clipped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxArea {
    BorderBox,
    PaddingBox,
    ContentBox,
}

impl BoxArea {
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let name = input.expect_ident()?;
        match name.to_ascii_lowercase().as_str() {
            "border-box" => Ok(Self::BorderBox),
            "padding-box" => Ok(Self::PaddingBox),
            "content-box" => Ok(Self::ContentBox),
            _ => Err(ParseError::UnexpectedToken),
        }
    }
}

impl fmt::Display for BoxArea {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::BorderBox => "border-box",
            Self::PaddingBox => "padding-box",
            Self::ContentBox => "content-box",
        })
    }
}

/// `background-origin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundOrigin {
    Inherit,
    Layers(Layers<BoxArea>),
}

impl BackgroundOrigin {
    /// Parse `<box>#  | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for unknown boxes.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, BoxArea::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

layered_property!(BackgroundOrigin, BoxArea::PaddingBox);

/// `background-clip`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundClip {
    Inherit,
    Layers(Layers<BoxArea>),
}

impl BackgroundClip {
    /// Parse `<box>#  | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for unknown boxes.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, BoxArea::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

layered_property!(BackgroundClip, BoxArea::BorderBox);

/// One axis of an explicit background size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeComponent {
    Auto,
    Length(Length),
    Percentage(Percentage),
}

impl SizeComponent {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if keyword(input, "auto") {
            return Ok(Self::Auto);
        }
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }

    fn compute(&mut self, font: FontContext) {
        if let Self::Length(length) = self {
            *length = length.compute(font);
        }
    }
}

impl fmt::Display for SizeComponent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => formatter.write_str("auto"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// One layer of `background-size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerSize {
    Cover,
    Contain,
    Explicit(SizeComponent, SizeComponent),
}

impl LayerSize {
    pub const AUTO: Self = Self::Explicit(SizeComponent::Auto, SizeComponent::Auto);

    /// `cover | contain | <size-component>{1,2}`; a missing height is `auto`.
    pub(crate) fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if keyword(input, "cover") {
            return Ok(Self::Cover);
        }
        if keyword(input, "contain") {
            return Ok(Self::Contain);
        }
        let width = SizeComponent::parse(input)?;
        let height = input
            .try_parse(SizeComponent::parse)
            .unwrap_or(SizeComponent::Auto);
        Ok(Self::Explicit(width, height))
    }
}

impl fmt::Display for LayerSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cover => formatter.write_str("cover"),
            Self::Contain => formatter.write_str("contain"),
            Self::Explicit(width, SizeComponent::Auto) => write!(formatter, "{width}"),
            Self::Explicit(width, height) => write!(formatter, "{width} {height}"),
        }
    }
}

/// `background-size`.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundSize {
    Inherit,
    Layers(Layers<LayerSize>),
}

impl BackgroundSize {
    /// Parse a comma list of sizes, or `inherit`.
    ///
    /// # Errors
    /// Returns an error for negative or malformed sizes.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Layers(parse_layers(input, LayerSize::parse)?))
    }

    /// Resolve `em`/`ex` in every layer.
    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Layers(layers) = self {
            for layer in layers.iter_mut() {
                if let LayerSize::Explicit(width, height) = layer {
                    width.compute(font);
                    height.compute(font);
                }
            }
        }
    }
}

layered_property!(BackgroundSize, LayerSize::AUTO);

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn position(text: &str) -> Result<BackgroundPosition, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        BackgroundPosition::parse(&mut parser)
    }

    fn first_layer(value: Result<BackgroundPosition, ParseError>) -> Option<LayerPosition> {
        match value {
            Ok(BackgroundPosition::Layers(layers)) => layers.first().copied(),
            Ok(BackgroundPosition::Inherit) | Err(_) => None,
        }
    }

    #[test]
    fn single_keyword_centers_the_other_axis() {
        assert_eq!(
            first_layer(position("top")),
            Some(LayerPosition {
                horizontal: HorizontalPosition::Center,
                vertical: VerticalPosition::Top,
            })
        );
        assert_eq!(
            first_layer(position("25%")),
            Some(LayerPosition {
                horizontal: HorizontalPosition::Percentage(Percentage(0.25)),
                vertical: VerticalPosition::Center,
            })
        );
    }

    #[test]
    fn vertical_keyword_first_is_swapped() {
        assert_eq!(
            first_layer(position("bottom right")),
            Some(LayerPosition {
                horizontal: HorizontalPosition::Right,
                vertical: VerticalPosition::Bottom,
            })
        );
        assert!(position("top 10px").is_err());
        assert!(position("left right").is_err());
    }

    #[test]
    fn each_layer_computes_independently() {
        let mut value = position("1em 0, 2em 3ex").unwrap_or(BackgroundPosition::Inherit);
        value.compute(None, FontContext::from_em(10.0));
        assert_eq!(value.to_string(), "10px 0, 20px 15px");
    }

    #[test]
    fn repeat_keywords_serialize_canonically() {
        let mut input = ParserInput::new("repeat-x, no-repeat repeat, space space");
        let mut parser = Parser::new(&mut input);
        let value = BackgroundRepeat::parse(&mut parser);
        assert_eq!(
            value.map(|repeat| repeat.to_string()),
            Ok("repeat-x, repeat-y, space".to_owned())
        );
    }

    #[test]
    fn size_keeps_single_width() {
        let mut input = ParserInput::new("2em, cover");
        let mut parser = Parser::new(&mut input);
        let mut value = BackgroundSize::parse(&mut parser).unwrap_or(BackgroundSize::Inherit);
        value.compute(None, FontContext::from_em(8.0));
        assert_eq!(value.to_string(), "16px, cover");
        assert_eq!(
            BackgroundSize::initial(),
            BackgroundSize::Layers(single(LayerSize::AUTO))
        );
    }
}
