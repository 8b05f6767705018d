//! §3.7 The `font` shorthand.
//! See <https://www.w3.org/TR/CSS21/fonts.html#font-shorthand>

use crate::{FontFamily, FontSize, FontStyle, FontVariant, FontWeight, LineHeight};
use css_values_units::cssparser::Parser;
use css_values_units::{ParseError, Specified, try_inherit};

/// Keywords naming a system font. Used alone they reset every longhand.
const SYSTEM_FONTS: [&str; 6] = [
    "caption",
    "icon",
    "menu",
    "message-box",
    "small-caption",
    "status-bar",
];

/// The six longhands set by `font`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontShorthand {
    pub style: FontStyle,
    pub variant: FontVariant,
    pub weight: FontWeight,
    pub size: FontSize,
    pub line_height: LineHeight,
    pub family: FontFamily,
}

impl FontShorthand {
    fn inherited() -> Self {
        Self {
            style: FontStyle::Inherit,
            variant: FontVariant::Inherit,
            weight: FontWeight::Inherit,
            size: FontSize::Inherit,
            line_height: LineHeight::Inherit,
            family: FontFamily::Inherit,
        }
    }

    fn initial() -> Self {
        Self {
            style: FontStyle::initial(),
            variant: FontVariant::initial(),
            weight: FontWeight::initial(),
            size: FontSize::initial(),
            line_height: LineHeight::initial(),
            family: FontFamily::initial(),
        }
    }
}

fn parse_system_font(input: &mut Parser<'_, '_>) -> Result<(), ParseError> {
    let ident = input.expect_ident()?;
    if SYSTEM_FONTS
        .iter()
        .any(|keyword| ident.eq_ignore_ascii_case(keyword))
    {
        log::trace!("font: system font `{ident}` resolves to initial values");
        return Ok(());
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse `[[style || variant || weight]? size [/ line-height]? family] | <system font> | inherit`.
///
/// Omitted parts are reset to their initial values. A leading `normal` counts
/// against any of the first three slots.
///
/// # Errors
/// Returns an error when the size or family is missing or a component is malformed.
pub fn parse_font_shorthand(input: &mut Parser<'_, '_>) -> Result<FontShorthand, ParseError> {
    if try_inherit(input) {
        return Ok(FontShorthand::inherited());
    }
    if input
        .try_parse(|inner| {
            parse_system_font(inner)?;
            inner.expect_exhausted().map_err(ParseError::from)
        })
        .is_ok()
    {
        return Ok(FontShorthand::initial());
    }

    let mut style = None;
    let mut variant = None;
    let mut weight = None;
    let mut prefix_count = 0;
    while prefix_count < 3 {
        if input
            .try_parse(|inner| inner.expect_ident_matching("normal"))
            .is_ok()
        {
            prefix_count += 1;
        } else if style.is_none()
            && let Ok(parsed) = input.try_parse(FontStyle::parse_keyword)
        {
            style = Some(parsed);
            prefix_count += 1;
        } else if variant.is_none()
            && let Ok(parsed) = input.try_parse(FontVariant::parse_keyword)
        {
            variant = Some(parsed);
            prefix_count += 1;
        } else if weight.is_none()
            && let Ok(parsed) = input.try_parse(FontWeight::parse_value)
        {
            weight = Some(parsed);
            prefix_count += 1;
        } else {
            break;
        }
    }

    let size = FontSize::parse_value(input)?;
    let line_height = if input.try_parse(|inner| inner.expect_delim('/')).is_ok() {
        LineHeight::parse_value(input)?
    } else {
        LineHeight::initial()
    };
    let family = FontFamily::parse_value(input)?;

    Ok(FontShorthand {
        style: style.unwrap_or_else(FontStyle::initial),
        variant: variant.unwrap_or_else(FontVariant::initial),
        weight: weight.unwrap_or_else(FontWeight::initial),
        size,
        line_height,
        family,
    })
}
