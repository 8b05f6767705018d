//! §3 `white-space`.
//! See <https://www.w3.org/TR/css-text-3/#white-space-property>

use css_values_units::keyword_property;

keyword_property! {
    pub enum WhiteSpace {
        Normal => "normal",
        Pre => "pre",
        Nowrap => "nowrap",
        PreWrap => "pre-wrap",
        PreLine => "pre-line",
    }
    initial = Normal;
}

impl WhiteSpace {
    /// Whether runs of spaces and tabs collapse to one space.
    pub const fn collapses_spaces(self) -> bool {
        matches!(self, Self::Normal | Self::Nowrap | Self::PreLine | Self::Inherit)
    }

    /// Whether lines may wrap at soft wrap opportunities.
    pub const fn wraps(self) -> bool {
        !matches!(self, Self::Pre | Self::Nowrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_flags() {
        assert!(WhiteSpace::PreLine.collapses_spaces());
        assert!(WhiteSpace::PreLine.wraps());
        assert!(!WhiteSpace::Pre.collapses_spaces());
        assert!(!WhiteSpace::Nowrap.wraps());
        assert_eq!(WhiteSpace::from_keyword("PRE-WRAP"), Some(WhiteSpace::PreWrap));
    }
}
