//! The measurement environment computed values are resolved against.
//!
//! A `ResourceCache` is built once before a compute pass and shared read-only by
//! every `compute` call: DPI for physical units, the default text color and quote
//! pairs, the discrete font-size table behind `xx-small`..`xx-large`, and a
//! font-metrics lookup.

use crate::{Color, FontContext, Length, LengthUnit};
use core::fmt;
use std::env;

/// Reference resolution of CSS pixels.
const DEFAULT_DPI: f32 = 96.0;
/// Initial `medium` font size in pixels.
const DEFAULT_MEDIUM_FONT_SIZE: f32 = 16.0;
/// `xx-small`..`xx-large` at a 16px `medium`.
const FONT_SIZE_STEPS: [f32; 7] = [9.0, 10.0, 13.0, 16.0, 18.0, 24.0, 32.0];
/// Index of `medium` in `FONT_SIZE_STEPS`.
const MEDIUM_INDEX: usize = 3;

/// How the size of `1ex` is derived from the element font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExHeight {
    /// `ex = em * 0.5`.
    #[default]
    HalfEm,
    /// Ask the font-metrics source for the x-height of the first family.
    FontMetrics,
}

/// Vertical metrics of a font at a given size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub x_height: f32,
}

/// Font metrics lookup by family name.
pub trait FontMetricsSource: fmt::Debug {
    /// Metrics for `family` at `size_px`, or `None` if the family is unknown.
    fn metrics(&self, family: &str, size_px: f32) -> Option<FontMetrics>;
}

/// Proportional metrics used when no font backend is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateMetrics;

impl FontMetricsSource for ApproximateMetrics {
    fn metrics(&self, _family: &str, size_px: f32) -> Option<FontMetrics> {
        Some(FontMetrics {
            ascent: size_px * 0.8,
            descent: size_px * 0.2,
            line_gap: 0.0,
            x_height: size_px * 0.5,
        })
    }
}

/// The seven absolute font sizes, `xx-small` through `xx-large`, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeTable([f32; 7]);

impl FontSizeTable {
    /// Table scaled so that `medium` equals `medium_px`.
    pub fn with_medium(medium_px: f32) -> Self {
        let scale = medium_px / DEFAULT_MEDIUM_FONT_SIZE;
        Self(FONT_SIZE_STEPS.map(|step| step * scale))
    }

    /// Size for step `index` (0 = `xx-small`); out-of-range steps clamp to `xx-large`.
    pub fn get(&self, index: usize) -> f32 {
        self.0
            .get(index)
            .or_else(|| self.0.last())
            .copied()
            .unwrap_or(DEFAULT_MEDIUM_FONT_SIZE)
    }

    /// The `medium` size.
    pub fn medium(&self) -> f32 {
        self.get(MEDIUM_INDEX)
    }
}

impl Default for FontSizeTable {
    fn default() -> Self {
        Self(FONT_SIZE_STEPS)
    }
}

/// Configuration settings for the resource environment.
///
/// Can be loaded from environment variables or constructed programmatically.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Device resolution used for `in`/`cm`/`mm`/`pt`/`pc`.
    pub dpi: f32,
    /// Pixel size of the `medium` keyword and of the root em.
    pub font_size_medium: f32,
    /// Initial value of `color`.
    pub default_color: Color,
    /// Source of `ex` sizes.
    pub ex_height: ExHeight,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            font_size_medium: DEFAULT_MEDIUM_FONT_SIZE,
            default_color: Color::BLACK,
            ex_height: ExHeight::HalfEm,
        }
    }
}

impl StyleConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VALOR_DPI`: device resolution (default: 96)
    /// - `VALOR_FONT_SIZE_MEDIUM`: `medium` font size in px (default: 16)
    /// - `VALOR_DEFAULT_COLOR`: any CSS color (default: black)
    /// - `VALOR_EX_FROM_FONT`: set to "1" to take `ex` from font metrics
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let dpi = env::var("VALOR_DPI")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .filter(|dpi| *dpi > 0.0)
            .unwrap_or(defaults.dpi);
        let font_size_medium = env::var("VALOR_FONT_SIZE_MEDIUM")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .filter(|size| *size > 0.0)
            .unwrap_or(defaults.font_size_medium);
        let default_color = match env::var("VALOR_DEFAULT_COLOR") {
            Ok(text) => Color::from_text(&text).unwrap_or_else(|| {
                log::debug!("VALOR_DEFAULT_COLOR: ignoring unparsable color {text:?}");
                defaults.default_color
            }),
            Err(_) => defaults.default_color,
        };
        let ex_height = if env::var("VALOR_EX_FROM_FONT").ok().as_deref() == Some("1") {
            ExHeight::FontMetrics
        } else {
            ExHeight::HalfEm
        };
        Self {
            dpi,
            font_size_medium,
            default_color,
            ex_height,
        }
    }
}

/// Read-only environment shared by a compute pass.
#[derive(Debug)]
pub struct ResourceCache {
    dpi: f32,
    default_color: Color,
    default_quotes: Vec<(String, String)>,
    font_sizes: FontSizeTable,
    ex_height: ExHeight,
    metrics: Box<dyn FontMetricsSource>,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl ResourceCache {
    /// Build the environment from a configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            dpi: config.dpi,
            default_color: config.default_color,
            default_quotes: vec![
                ("\u{201c}".to_owned(), "\u{201d}".to_owned()),
                ("\u{2018}".to_owned(), "\u{2019}".to_owned()),
            ],
            font_sizes: FontSizeTable::with_medium(config.font_size_medium),
            ex_height: config.ex_height,
            metrics: Box::new(ApproximateMetrics),
        }
    }

    /// Replace the font-metrics backend.
    #[must_use]
    pub fn with_metrics_source(mut self, source: Box<dyn FontMetricsSource>) -> Self {
        self.metrics = source;
        self
    }

    /// Replace the quote pairs used for `quotes: auto`.
    #[must_use]
    pub fn with_default_quotes(mut self, quotes: Vec<(String, String)>) -> Self {
        self.default_quotes = quotes;
        self
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn default_quotes(&self) -> &[(String, String)] {
        &self.default_quotes
    }

    pub fn font_sizes(&self) -> &FontSizeTable {
        &self.font_sizes
    }

    /// Metrics for `family` at `size_px`.
    pub fn font_metrics(&self, family: &str, size_px: f32) -> Option<FontMetrics> {
        self.metrics.metrics(family, size_px)
    }

    /// Convert a length to device pixels, applying the DPI to physical units.
    pub fn length_to_px(&self, length: Length) -> f32 {
        match length.unit {
            LengthUnit::Inches => length.value * self.dpi,
            LengthUnit::Centimeters => length.value * self.dpi / 2.54,
            LengthUnit::Millimeters => length.value * self.dpi / 25.4,
            LengthUnit::Points => length.value * self.dpi / 72.0,
            LengthUnit::Picas => length.value * self.dpi / 6.0,
            LengthUnit::Pixels | LengthUnit::ComputedPx | LengthUnit::Ems | LengthUnit::Exs => {
                length.value
            }
        }
    }

    /// Font context of the root element's (virtual) parent.
    pub fn root_font_context(&self) -> FontContext {
        FontContext::from_em(self.font_sizes.medium())
    }

    /// Font context for an element whose font size is `em_size` pixels.
    ///
    /// With `ExHeight::FontMetrics` the x-height of `family` is used when the
    /// metrics source knows it.
    pub fn font_context(&self, em_size: f32, family: Option<&str>) -> FontContext {
        let halved = FontContext::from_em(em_size);
        match (self.ex_height, family) {
            (ExHeight::FontMetrics, Some(name)) => self
                .font_metrics(name, em_size)
                .map_or(halved, |metrics| FontContext {
                    em_size,
                    ex_size: metrics.x_height,
                }),
            (ExHeight::HalfEm | ExHeight::FontMetrics, _) => halved,
        }
    }
}
