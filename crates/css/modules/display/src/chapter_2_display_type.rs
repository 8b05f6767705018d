//! The `display` property and blockification.
//! See <https://www.w3.org/TR/CSS21/visuren.html#dis-pos-flo>

use css_position::{Float, Position};
use css_values_units::{inherit, keyword_property};

keyword_property! {
    /// `display`.
    pub enum Display {
        Inline => "inline",
        Block => "block",
        ListItem => "list-item",
        InlineBlock => "inline-block",
        Table => "table",
        InlineTable => "inline-table",
        TableRowGroup => "table-row-group",
        TableHeaderGroup => "table-header-group",
        TableFooterGroup => "table-footer-group",
        TableRow => "table-row",
        TableColumnGroup => "table-column-group",
        TableColumn => "table-column",
        TableCell => "table-cell",
        TableCaption => "table-caption",
        None => "none",
        Flex => "flex",
        InlineFlex => "inline-flex",
        /// Children laid out in one row or column, see `-clan-box-direction`.
        ClanBox => "-clan-box",
    }
    initial = Inline;
}

impl Display {
    /// The block-level equivalent used for out-of-flow boxes.
    pub const fn blockified(self) -> Self {
        match self {
            Self::InlineTable => Self::Table,
            Self::InlineFlex => Self::Flex,
            Self::Inline
            | Self::InlineBlock
            | Self::TableRowGroup
            | Self::TableHeaderGroup
            | Self::TableFooterGroup
            | Self::TableRow
            | Self::TableColumnGroup
            | Self::TableColumn
            | Self::TableCell
            | Self::TableCaption => Self::Block,
            Self::Inherit
            | Self::Block
            | Self::ListItem
            | Self::Table
            | Self::None
            | Self::Flex
            | Self::ClanBox => self,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Resolve inheritance, then blockify absolutely positioned and floated boxes.
    ///
    /// `position` and `float` must already be computed.
    pub fn compute_with(&mut self, parent: Option<&Self>, position: Position, float: Float) {
        inherit(self, parent);
        if position.is_absolutely_positioned() || float.is_floating() {
            *self = self.blockified();
        }
    }
}
