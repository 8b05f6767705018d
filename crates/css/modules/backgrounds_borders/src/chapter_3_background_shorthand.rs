//! §3.10 The `background` shorthand.
//! See <https://www.w3.org/TR/css-backgrounds-3/#background>

use crate::chapter_3_backgrounds::{
    Attachment, BackgroundAttachment, BackgroundClip, BackgroundColor, BackgroundImage,
    BackgroundOrigin, BackgroundPosition, BackgroundRepeat, BackgroundSize, BoxArea, LayerImage,
    LayerPosition, LayerRepeat, LayerSize, Layers,
};
use css_values_units::cssparser::Parser;
use css_values_units::{Color, ParseError, parse_color, try_inherit};

/// The eight longhands `background` expands to.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundShorthand {
    pub color: BackgroundColor,
    pub image: BackgroundImage,
    pub repeat: BackgroundRepeat,
    pub attachment: BackgroundAttachment,
    pub position: BackgroundPosition,
    pub origin: BackgroundOrigin,
    pub clip: BackgroundClip,
    pub size: BackgroundSize,
}

impl BackgroundShorthand {
    fn inherit() -> Self {
        Self {
            color: BackgroundColor::Inherit,
            image: BackgroundImage::Inherit,
            repeat: BackgroundRepeat::Inherit,
            attachment: BackgroundAttachment::Inherit,
            position: BackgroundPosition::Inherit,
            origin: BackgroundOrigin::Inherit,
            clip: BackgroundClip::Inherit,
            size: BackgroundSize::Inherit,
        }
    }
}

/// Values collected for one comma-separated layer.
struct Layer {
    image: Option<LayerImage>,
    repeat: Option<LayerRepeat>,
    attachment: Option<Attachment>,
    position: Option<(LayerPosition, Option<LayerSize>)>,
    boxes: Option<(BoxArea, BoxArea)>,
}

impl Layer {
    const fn new() -> Self {
        Self {
            image: None,
            repeat: None,
            attachment: None,
            position: None,
            boxes: None,
        }
    }
}

/// `<position> [ / <bg-size> ]?`
fn parse_position_and_size(
    input: &mut Parser<'_, '_>,
) -> Result<(LayerPosition, Option<LayerSize>), ParseError> {
    let position = LayerPosition::parse(input)?;
    if input.try_parse(|inner| inner.expect_delim('/')).is_err() {
        return Ok((position, None));
    }
    Ok((position, Some(LayerSize::parse(input)?)))
}

/// `<box> <box>?`; a single box sets both origin and clip.
fn parse_boxes(input: &mut Parser<'_, '_>) -> Result<(BoxArea, BoxArea), ParseError> {
    let origin = BoxArea::parse(input)?;
    let clip = input.try_parse(BoxArea::parse).unwrap_or(origin);
    Ok((origin, clip))
}

/// Parse the `background` shorthand.
///
/// Each layer takes image, repeat, attachment, position (optionally followed by
/// `/ size`) and origin/clip boxes in any order, each at most once. A color may
/// only appear in the final layer. Parts a layer omits take their initial values,
/// so the whole declaration replaces all eight longhands.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when a token fits no remaining part, or
/// when a color is followed by another layer.
pub fn parse_background_shorthand(
    input: &mut Parser<'_, '_>,
) -> Result<BackgroundShorthand, ParseError> {
    if try_inherit(input) {
        return Ok(BackgroundShorthand::inherit());
    }
    let mut color: Option<Color> = None;
    let mut images = Layers::new();
    let mut repeats = Layers::new();
    let mut attachments = Layers::new();
    let mut positions = Layers::new();
    let mut origins = Layers::new();
    let mut clips = Layers::new();
    let mut sizes = Layers::new();

    loop {
        let mut layer = Layer::new();
        let mut more_layers = false;
        loop {
            if color.is_none()
                && let Ok(parsed) = input.try_parse(parse_color)
            {
                color = Some(parsed);
            } else if layer.image.is_none()
                && let Ok(image) = input.try_parse(LayerImage::parse)
            {
                layer.image = Some(image);
            } else if layer.repeat.is_none()
                && let Ok(repeat) = input.try_parse(LayerRepeat::parse)
            {
                layer.repeat = Some(repeat);
            } else if layer.attachment.is_none()
                && let Ok(attachment) = input.try_parse(Attachment::parse)
            {
                layer.attachment = Some(attachment);
            } else if layer.position.is_none()
                && let Ok(position) = input.try_parse(parse_position_and_size)
            {
                layer.position = Some(position);
            } else if layer.boxes.is_none()
                && let Ok(boxes) = input.try_parse(parse_boxes)
            {
                layer.boxes = Some(boxes);
            } else {
                return Err(ParseError::UnexpectedToken);
            }

            if input.is_exhausted() {
                break;
            }
            if input.try_parse(|inner| inner.expect_comma()).is_ok() {
                more_layers = true;
                break;
            }
        }

        let (position, size) = layer.position.unwrap_or((LayerPosition::TOP_LEFT, None));
        let (origin, clip) = layer
            .boxes
            .unwrap_or((BoxArea::PaddingBox, BoxArea::BorderBox));
        images.push(layer.image.unwrap_or(LayerImage::None));
        repeats.push(layer.repeat.unwrap_or(LayerRepeat::REPEAT));
        attachments.push(layer.attachment.unwrap_or(Attachment::Scroll));
        positions.push(position);
        origins.push(origin);
        clips.push(clip);
        sizes.push(size.unwrap_or(LayerSize::AUTO));

        if !more_layers {
            break;
        }
        if color.is_some() {
            return Err(ParseError::UnexpectedToken);
        }
    }

    Ok(BackgroundShorthand {
        color: BackgroundColor::Color(color.unwrap_or(Color::TRANSPARENT)),
        image: BackgroundImage::Layers(images),
        repeat: BackgroundRepeat::Layers(repeats),
        attachment: BackgroundAttachment::Layers(attachments),
        position: BackgroundPosition::Layers(positions),
        origin: BackgroundOrigin::Layers(origins),
        clip: BackgroundClip::Layers(clips),
        size: BackgroundSize::Layers(sizes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::Specified;
    use css_values_units::cssparser::ParserInput;

    fn parse(text: &str) -> Result<BackgroundShorthand, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let parsed = parse_background_shorthand(&mut parser)?;
        parser.expect_exhausted()?;
        Ok(parsed)
    }

    #[test]
    fn color_alone_resets_every_other_longhand() {
        let parsed = parse("red");
        assert!(parsed.is_ok_and(|value| {
            value.color == BackgroundColor::Color(Color::rgb(255, 0, 0))
                && value.image == BackgroundImage::initial()
                && value.position == BackgroundPosition::initial()
                && value.origin == BackgroundOrigin::initial()
                && value.clip == BackgroundClip::initial()
        }));
    }

    #[test]
    fn color_only_in_final_layer() {
        assert!(parse("url(a.png) red, url(b.png)").is_err());
        assert!(parse("url(a.png), url(b.png) red").is_ok());
    }

    #[test]
    fn position_with_size_and_boxes() {
        let parsed = parse("url(a.png) center / cover no-repeat content-box").map(|value| {
            (
                value.position.to_string(),
                value.size.to_string(),
                value.repeat.to_string(),
                value.origin.to_string(),
                value.clip.to_string(),
            )
        });
        assert_eq!(
            parsed,
            Ok((
                "center center".to_owned(),
                "cover".to_owned(),
                "no-repeat".to_owned(),
                "content-box".to_owned(),
                "content-box".to_owned(),
            ))
        );
    }

    #[test]
    fn duplicate_part_is_rejected() {
        assert!(parse("fixed scroll").is_err());
        assert!(parse("inherit red").is_err());
    }
}
