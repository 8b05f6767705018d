//! Facts about the containing block that some computed values depend on.

use css_cascade::BoxProperties;
use css_display::Display;

/// Extra inputs to `ComputeStyle::compute`, derived from the parent's computed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputeContext {
    /// The containing block's width depends on its content (shrink-to-fit).
    pub containing_block_width_auto: bool,
    /// The containing block's height is `auto`; percentage heights compute to `auto`.
    /// See <https://www.w3.org/TR/CSS21/visudet.html#the-height-property>
    pub containing_block_height_auto: bool,
    /// Direction of the containing block, used for over-constrained `left`/`right`.
    pub ltr: bool,
}

impl ComputeContext {
    /// Context of the root element: the initial containing block is definite and ltr.
    pub const fn root() -> Self {
        Self {
            containing_block_width_auto: false,
            containing_block_height_auto: false,
            ltr: true,
        }
    }

    /// Context for the children of a box with the given computed values.
    pub fn for_children(parent: &BoxProperties) -> Self {
        let shrink_to_fit = parent.float.is_floating()
            || parent.position.is_absolutely_positioned()
            || matches!(parent.display, Display::InlineBlock | Display::TableCell);
        Self {
            containing_block_width_auto: shrink_to_fit && parent.width.is_auto(),
            containing_block_height_auto: parent.height.is_auto(),
            ltr: parent.direction.is_ltr(),
        }
    }
}

impl Default for ComputeContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_position::Float;

    #[test]
    fn floats_with_auto_width_are_shrink_to_fit() {
        let mut parent = BoxProperties::default();
        assert!(!ComputeContext::for_children(&parent).containing_block_width_auto);
        parent.float = Float::Left;
        let context = ComputeContext::for_children(&parent);
        assert!(context.containing_block_width_auto);
        assert!(context.containing_block_height_auto);
        assert!(context.ltr);
    }
}
