//! §2.1 `text-transform`.
//! See <https://www.w3.org/TR/css-text-3/#text-transform-property>

use css_values_units::keyword_property;

keyword_property! {
    /// Case transformation applied to the element's text.
    pub enum TextTransform {
        None => "none",
        Capitalize => "capitalize",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
    }
    initial = None;
}
