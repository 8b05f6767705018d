//! Alignment — `justify-content`, `align-items`, `align-self` and `align-content`
//! See <https://www.w3.org/TR/css-flexbox-1/#alignment>

use css_values_units::keyword_property;

keyword_property! {
    /// Main-axis distribution of free space.
    /// See <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
    pub enum JustifyContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
    initial = FlexStart;
}

keyword_property! {
    /// Default cross-axis alignment of the container's items.
    /// See <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
    pub enum AlignItems {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
    initial = Stretch;
}

keyword_property! {
    /// Per-item override of `align-items`; `auto` defers to the container.
    pub enum AlignSelf {
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
    initial = Auto;
}

impl AlignSelf {
    /// The alignment actually used for an item whose container has `align_items`.
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto | Self::Inherit => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

keyword_property! {
    /// Packing of flex lines in a multi-line container.
    /// See <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
    pub enum AlignContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
    initial = Stretch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_self_follows_container() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::FlexEnd.resolve(AlignItems::Center), AlignItems::FlexEnd);
    }
}
