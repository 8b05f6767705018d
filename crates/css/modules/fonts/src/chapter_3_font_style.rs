//! §3.3 `font-style` and the CSS 2.1 `font-variant`.
//! See <https://www.w3.org/TR/css-fonts-3/#font-style-prop>

use css_values_units::keyword_property;

keyword_property! {
    /// `font-style`.
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
    initial = Normal;
}

keyword_property! {
    /// `font-variant` (CSS 2.1 values only).
    pub enum FontVariant {
        Normal => "normal",
        SmallCaps => "small-caps",
    }
    initial = Normal;
}
