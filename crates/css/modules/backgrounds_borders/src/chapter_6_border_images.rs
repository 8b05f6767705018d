//! §6 Border images.
//! See <https://www.w3.org/TR/css-backgrounds-3/#border-images>

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::parsing::expand_sides;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, Specified, Url, inherit, parse_non_negative_length,
    parse_non_negative_number, parse_non_negative_percentage, parse_url, try_inherit,
};

fn keyword(input: &mut Parser<'_, '_>, name: &str) -> bool {
    input
        .try_parse(|inner| inner.expect_ident_matching(name))
        .is_ok()
}

/// Greedily parse 1-4 items and expand them to the four sides.
fn parse_four<T: Clone>(
    input: &mut Parser<'_, '_>,
    mut parse_item: impl FnMut(&mut Parser<'_, '_>) -> Result<T, ParseError>,
) -> Result<[T; 4], ParseError> {
    let mut values = Vec::with_capacity(4);
    while values.len() < 4 {
        match input.try_parse(&mut parse_item) {
            Ok(value) => values.push(value),
            Err(_) => break,
        }
    }
    expand_sides(values).ok_or(ParseError::UnexpectedToken)
}

fn write_four<T: fmt::Display>(formatter: &mut fmt::Formatter<'_>, values: &[T; 4]) -> fmt::Result {
    let [top, right, bottom, left] = values;
    write!(formatter, "{top} {right} {bottom} {left}")
}

/// `border-image-source`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BorderImageSource {
    Inherit,
    None,
    Url(Url),
}

impl BorderImageSource {
    /// Parse `none | <url> | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything else.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if keyword(input, "none") {
            return Ok(Self::None);
        }
        Ok(Self::Url(parse_url(input)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for BorderImageSource {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::None => formatter.write_str("none"),
            Self::Url(url) => write!(formatter, "{url}"),
        }
    }
}

/// One edge offset into the border image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliceValue {
    Number(f32),
    Percentage(Percentage),
}

impl SliceValue {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Number(parse_non_negative_number(input)?.0))
    }
}

impl fmt::Display for SliceValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

/// `border-image-slice`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderImageSlice {
    Inherit,
    Values { sides: [SliceValue; 4], fill: bool },
}

impl BorderImageSlice {
    /// Parse `[<number> | <percentage>]{1,4} && fill? | inherit`.
    ///
    /// # Errors
    /// Returns an error when no offset is given.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let fill_first = keyword(input, "fill");
        let sides = parse_four(input, SliceValue::parse)?;
        let fill = fill_first || keyword(input, "fill");
        Ok(Self::Values { sides, fill })
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for BorderImageSlice {
    fn initial() -> Self {
        Self::Values {
            sides: [SliceValue::Percentage(Percentage(1.0)); 4],
            fill: false,
        }
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageSlice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Values { sides, fill } => {
                write_four(formatter, sides)?;
                if *fill {
                    formatter.write_str(" fill")?;
                }
                Ok(())
            }
        }
    }
}

/// One side of `border-image-width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageWidthValue {
    Length(Length),
    /// Multiple of the computed border width.
    Number(f32),
    Percentage(Percentage),
    Auto,
}

impl ImageWidthValue {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if keyword(input, "auto") {
            return Ok(Self::Auto);
        }
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        if let Ok(number) = input.try_parse(parse_non_negative_number) {
            return Ok(Self::Number(number.0));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }
}

impl fmt::Display for ImageWidthValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
            Self::Auto => formatter.write_str("auto"),
        }
    }
}

/// `border-image-width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderImageWidth {
    Inherit,
    Values([ImageWidthValue; 4]),
}

impl BorderImageWidth {
    /// Parse `[<length> | <number> | <percentage> | auto]{1,4} | inherit`.
    ///
    /// # Errors
    /// Returns an error when no width is given.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Values(parse_four(input, ImageWidthValue::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Values(values) = self {
            for value in values.iter_mut() {
                if let ImageWidthValue::Length(length) = value {
                    *length = length.compute(font);
                }
            }
        }
    }
}

impl Specified for BorderImageWidth {
    fn initial() -> Self {
        Self::Values([ImageWidthValue::Number(1.0); 4])
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageWidth {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Values(values) => write_four(formatter, values),
        }
    }
}

/// One side of `border-image-outset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutsetValue {
    Length(Length),
    Number(f32),
}

impl OutsetValue {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(number) = input.try_parse(parse_non_negative_number) {
            return Ok(Self::Number(number.0));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }
}

impl fmt::Display for OutsetValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Number(number) => write!(formatter, "{number}"),
        }
    }
}

/// `border-image-outset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderImageOutset {
    Inherit,
    Values([OutsetValue; 4]),
}

impl BorderImageOutset {
    /// Parse `[<length> | <number>]{1,4} | inherit`.
    ///
    /// # Errors
    /// Returns an error when no outset is given.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Ok(Self::Values(parse_four(input, OutsetValue::parse)?))
    }

    pub fn compute(&mut self, parent: Option<&Self>, font: FontContext) {
        if inherit(self, parent) {
            return;
        }
        if let Self::Values(values) = self {
            for value in values.iter_mut() {
                if let OutsetValue::Length(length) = value {
                    *length = length.compute(font);
                }
            }
        }
    }
}

impl Specified for BorderImageOutset {
    fn initial() -> Self {
        Self::Values([OutsetValue::Number(0.0); 4])
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageOutset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Values(values) => write_four(formatter, values),
        }
    }
}

/// How the edge tiles of a border image fill their area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRepeatKind {
    Stretch,
    Repeat,
    Round,
    Space,
}

impl ImageRepeatKind {
    fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let name = input.expect_ident()?;
        match name.to_ascii_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "repeat" => Ok(Self::Repeat),
            "round" => Ok(Self::Round),
            "space" => Ok(Self::Space),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Repeat => "repeat",
            Self::Round => "round",
            Self::Space => "space",
        }
    }
}

/// `border-image-repeat`: horizontal and vertical tiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderImageRepeat {
    Inherit,
    Values(ImageRepeatKind, ImageRepeatKind),
}

impl BorderImageRepeat {
    /// Parse `<repeat-kind>{1,2} | inherit`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        let horizontal = ImageRepeatKind::parse(input)?;
        let vertical = input
            .try_parse(ImageRepeatKind::parse)
            .unwrap_or(horizontal);
        Ok(Self::Values(horizontal, vertical))
    }

    pub fn compute(&mut self, parent: Option<&Self>) {
        inherit(self, parent);
    }
}

impl Specified for BorderImageRepeat {
    fn initial() -> Self {
        Self::Values(ImageRepeatKind::Stretch, ImageRepeatKind::Stretch)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageRepeat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Values(horizontal, vertical) if horizontal == vertical => {
                formatter.write_str(horizontal.as_str())
            }
            Self::Values(horizontal, vertical) => {
                write!(formatter, "{} {}", horizontal.as_str(), vertical.as_str())
            }
        }
    }
}

/// The five longhands `border-image` expands to.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderImage {
    pub source: BorderImageSource,
    pub slice: BorderImageSlice,
    pub width: BorderImageWidth,
    pub outset: BorderImageOutset,
    pub repeat: BorderImageRepeat,
}

/// `<slice> [ / <width>? [ / <outset> ]? ]?`
fn parse_slice_group(
    input: &mut Parser<'_, '_>,
) -> Result<(BorderImageSlice, Option<BorderImageWidth>, Option<BorderImageOutset>), ParseError> {
    let slice = BorderImageSlice::parse_value(input)?;
    if input.try_parse(|inner| inner.expect_delim('/')).is_err() {
        return Ok((slice, None, None));
    }
    let width = input
        .try_parse(|inner| parse_four(inner, ImageWidthValue::parse))
        .ok()
        .map(BorderImageWidth::Values);
    if input.try_parse(|inner| inner.expect_delim('/')).is_err() {
        return match width {
            Some(_) => Ok((slice, width, None)),
            None => Err(ParseError::UnexpectedToken),
        };
    }
    let outset = BorderImageOutset::Values(parse_four(input, OutsetValue::parse)?);
    Ok((slice, width, Some(outset)))
}

/// Parse the `border-image` shorthand: source, slice group and repeat in any
/// order, each at most once. Omitted longhands are reset to their initial values.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for repeated or unknown parts.
pub fn parse_border_image_shorthand(input: &mut Parser<'_, '_>) -> Result<BorderImage, ParseError> {
    if try_inherit(input) {
        return Ok(BorderImage {
            source: BorderImageSource::Inherit,
            slice: BorderImageSlice::Inherit,
            width: BorderImageWidth::Inherit,
            outset: BorderImageOutset::Inherit,
            repeat: BorderImageRepeat::Inherit,
        });
    }
    let mut source = None;
    let mut slice_group = None;
    let mut repeat = None;
    loop {
        if source.is_none()
            && let Ok(parsed) = input.try_parse(BorderImageSource::parse_value)
        {
            source = Some(parsed);
        } else if slice_group.is_none()
            && let Ok(parsed) = input.try_parse(parse_slice_group)
        {
            slice_group = Some(parsed);
        } else if repeat.is_none()
            && let Ok(parsed) = input.try_parse(BorderImageRepeat::parse_value)
        {
            repeat = Some(parsed);
        } else {
            return Err(ParseError::UnexpectedToken);
        }
        if input.is_exhausted() {
            break;
        }
    }
    let (slice, width, outset) = slice_group.unwrap_or((BorderImageSlice::initial(), None, None));
    Ok(BorderImage {
        source: source.unwrap_or_else(BorderImageSource::initial),
        slice,
        width: width.unwrap_or_else(BorderImageWidth::initial),
        outset: outset.unwrap_or_else(BorderImageOutset::initial),
        repeat: repeat.unwrap_or_else(BorderImageRepeat::initial),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::cssparser::ParserInput;

    fn shorthand(text: &str) -> Result<BorderImage, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_border_image_shorthand(&mut parser)
    }

    #[test]
    fn slice_width_and_outset() {
        let parsed = shorthand("url(frame.png) 30 fill / 2 / 4px round").map(|image| {
            (
                image.slice.to_string(),
                image.width.to_string(),
                image.outset.to_string(),
                image.repeat.to_string(),
            )
        });
        assert_eq!(
            parsed,
            Ok((
                "30 30 30 30 fill".to_owned(),
                "2 2 2 2".to_owned(),
                "4px 4px 4px 4px".to_owned(),
                "round".to_owned(),
            ))
        );
    }

    #[test]
    fn outset_without_width() {
        let parsed = shorthand("10% / / 1");
        assert!(parsed.is_ok_and(|image| {
            image.width == BorderImageWidth::initial()
                && image.outset == BorderImageOutset::Values([OutsetValue::Number(1.0); 4])
        }));
        assert!(shorthand("10% /").is_err());
    }

    #[test]
    fn source_alone_resets_the_rest() {
        let parsed = shorthand("none");
        assert!(parsed.is_ok_and(|image| {
            image.source == BorderImageSource::None
                && image.slice == BorderImageSlice::initial()
                && image.repeat == BorderImageRepeat::initial()
        }));
    }
}
