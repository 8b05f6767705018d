//! `visibility`.
//! See <https://www.w3.org/TR/CSS21/visufx.html#visibility>

use css_values_units::keyword_property;

keyword_property! {
    /// `visibility`.
    pub enum Visibility {
        Visible => "visible",
        Hidden => "hidden",
        Collapse => "collapse",
    }
    initial = Visible;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_without_parent_is_visible() {
        let mut visibility = Visibility::Inherit;
        visibility.compute(None);
        assert_eq!(visibility, Visibility::Visible);
        assert_eq!(Visibility::Collapse.to_string(), "collapse");
    }
}
