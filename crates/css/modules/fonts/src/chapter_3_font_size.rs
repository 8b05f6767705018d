//! §3.5 `font-size`.
//! See <https://www.w3.org/TR/css-fonts-3/#font-size-prop>
//!
//! The computed value is always a pixel length; it is the `em` of the element and
//! of its children's `font-size` percentages.

use core::fmt;
use css_values_units::cssparser::Parser;
use css_values_units::{
    FontContext, Length, ParseError, Percentage, ResourceCache, Specified, inherit,
    keyword_property, parse_non_negative_length, parse_non_negative_percentage, try_inherit,
};

/// Scale between adjacent `larger`/`smaller` steps.
const RELATIVE_SCALE: f32 = 1.2;

keyword_property! {
    /// The seven absolute-size keywords, smallest first.
    pub enum AbsoluteSize {
        XxSmall => "xx-small",
        XSmall => "x-small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x-large",
        XxLarge => "xx-large",
    }
    initial = Medium;
}

impl AbsoluteSize {
    /// Position in the resource cache's font-size table.
    pub const fn index(self) -> usize {
        match self {
            Self::XxSmall => 0,
            Self::XSmall => 1,
            Self::Small => 2,
            Self::Medium | Self::Inherit => 3,
            Self::Large => 4,
            Self::XLarge => 5,
            Self::XxLarge => 6,
        }
    }
}

/// `font-size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Inherit,
    Absolute(AbsoluteSize),
    Larger,
    Smaller,
    Length(Length),
    Percentage(Percentage),
}

impl FontSize {
    /// Parse `<absolute-size> | <relative-size> | <length> | <percentage> | inherit`.
    ///
    /// # Errors
    /// Returns an error for negative sizes or unknown keywords.
    pub fn parse(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if try_inherit(input) {
            return Ok(Self::Inherit);
        }
        Self::parse_value(input)
    }

    /// Same as `parse` without `inherit`.
    ///
    /// # Errors
    /// Returns an error for negative sizes or unknown keywords.
    pub fn parse_value(input: &mut Parser<'_, '_>) -> Result<Self, ParseError> {
        if let Ok(size) = input.try_parse(AbsoluteSize::parse_keyword) {
            return Ok(Self::Absolute(size));
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("larger"))
            .is_ok()
        {
            return Ok(Self::Larger);
        }
        if input
            .try_parse(|inner| inner.expect_ident_matching("smaller"))
            .is_ok()
        {
            return Ok(Self::Smaller);
        }
        if let Ok(percentage) = input.try_parse(parse_non_negative_percentage) {
            return Ok(Self::Percentage(percentage));
        }
        Ok(Self::Length(parse_non_negative_length(input)?))
    }

    /// Resolve to pixels.
    ///
    /// `parent_font` is the parent's font context (the resource cache's root context
    /// for the root element); relative keywords, percentages and `em`/`ex` lengths
    /// are taken against it.
    pub fn compute(
        &mut self,
        parent: Option<&Self>,
        resources: &ResourceCache,
        parent_font: FontContext,
    ) {
        if inherit(self, parent) {
            return;
        }
        let parent_px = parent_font.em_size;
        let px = match *self {
            Self::Absolute(size) => resources.font_sizes().get(size.index()),
            Self::Inherit => resources.font_sizes().medium(),
            Self::Larger => parent_px * RELATIVE_SCALE,
            Self::Smaller => parent_px / RELATIVE_SCALE,
            Self::Percentage(percentage) => percentage.of(parent_px),
            Self::Length(length) => resources.length_to_px(length.compute(parent_font)),
        };
        *self = Self::Length(Length::computed(px));
    }

    /// The size in pixels; only exact after `compute`.
    pub const fn px(&self) -> Option<f32> {
        match self {
            Self::Length(length) => Some(length.value),
            Self::Inherit
            | Self::Absolute(_)
            | Self::Larger
            | Self::Smaller
            | Self::Percentage(_) => None,
        }
    }
}

impl Specified for FontSize {
    fn initial() -> Self {
        Self::Absolute(AbsoluteSize::Medium)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => formatter.write_str("inherit"),
            Self::Absolute(size) => formatter.write_str(size.as_str()),
            Self::Larger => formatter.write_str("larger"),
            Self::Smaller => formatter.write_str("smaller"),
            Self::Length(length) => write!(formatter, "{length}"),
            Self::Percentage(percentage) => write!(formatter, "{percentage}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::{LengthUnit, StyleConfig};

    fn computed(mut size: FontSize, parent_px: f32) -> Option<f32> {
        let resources = ResourceCache::default();
        size.compute(None, &resources, FontContext::from_em(parent_px));
        size.px()
    }

    #[test]
    fn keywords_use_the_table() {
        assert_eq!(computed(FontSize::Absolute(AbsoluteSize::Large), 10.0), Some(18.0));
        assert_eq!(computed(FontSize::Inherit, 10.0), Some(16.0));
    }

    #[test]
    fn relative_to_parent() {
        assert_eq!(computed(FontSize::Percentage(Percentage(1.5)), 20.0), Some(30.0));
        let larger = computed(FontSize::Larger, 10.0).unwrap_or_default();
        assert!((larger - 12.0).abs() < 1e-4);
        let em = Length {
            value: 2.0,
            unit: LengthUnit::Ems,
        };
        assert_eq!(computed(FontSize::Length(em), 12.0), Some(24.0));
    }

    #[test]
    fn points_scale_with_dpi() {
        let resources = ResourceCache::from_config(&StyleConfig {
            dpi: 144.0,
            ..StyleConfig::default()
        });
        let mut size = FontSize::Length(Length {
            value: 12.0,
            unit: LengthUnit::Points,
        });
        size.compute(None, &resources, resources.root_font_context());
        assert_eq!(size.px(), Some(24.0));
    }
}
