//! CSS Writing Modes Level 3 — §2 `direction` and `unicode-bidi`.
//! See <https://www.w3.org/TR/css-writing-modes-3/#direction>

use css_values_units::keyword_property;

keyword_property! {
    /// Inline base direction.
    pub enum Direction {
        Ltr => "ltr",
        Rtl => "rtl",
    }
    initial = Ltr;
}

impl Direction {
    /// `true` for left-to-right; an unresolved `inherit` counts as the initial `ltr`.
    pub const fn is_ltr(self) -> bool {
        !matches!(self, Self::Rtl)
    }
}

keyword_property! {
    pub enum UnicodeBidi {
        Normal => "normal",
        Embed => "embed",
        BidiOverride => "bidi-override",
    }
    initial = Normal;
}
