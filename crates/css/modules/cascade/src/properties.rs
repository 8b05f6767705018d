//! The longhand table: one `PropertyValue` variant and one `BoxProperties` slot
//! per longhand property.
//! See <https://www.w3.org/TR/CSS21/propidx.html>

use core::fmt;
use css_backgrounds_borders::{
    BackgroundAttachment, BackgroundClip, BackgroundColor, BackgroundImage, BackgroundOrigin,
    BackgroundPosition, BackgroundRepeat, BackgroundSize, BorderColor, BorderImageOutset,
    BorderImageRepeat, BorderImageSlice, BorderImageSource, BorderImageWidth, BorderRadius,
    BorderStyle, BorderWidth, BoxDecorationBreak, BoxShadow,
};
use css_box::{
    ClanBoxDirection, ClanBoxSizingFactor, MarginWidth, MaxSize, MinSize, PaddingWidth, Size,
};
use css_break::{LineCount, PageBreak, PageBreakInside};
use css_color::ColorProperty;
use css_display::{Display, Visibility};
use css_flexbox::{
    AlignContent, AlignItems, AlignSelf, FlexBasis, FlexDirection, FlexGrow, FlexShrink, FlexWrap,
    JustifyContent, Order,
};
use css_fonts::{FontFamily, FontSize, FontStyle, FontVariant, FontWeight, LineHeight};
use css_lists::{Content, CounterList, ListStyleImage, ListStylePosition, ListStyleType, Quotes};
use css_position::{Clear, Clip, Float, Inset, Overflow, Position, ZIndex};
use css_tables::{BorderCollapse, BorderSpacing, CaptionSide, EmptyCells, TableLayout};
use css_text::{
    Direction, Spacing, TextAlign, TextDecoration, TextIndent, TextTransform, UnicodeBidi,
    VerticalAlign, WhiteSpace,
};
use css_ui::{Cursor, OutlineColor, OutlineStyle, OutlineWidth};
use css_values_units::Specified;

/// Default of a slot no declaration touched: inherited properties start as
/// `inherit`, the others as their initial value.
macro_rules! specified_default {
    (inherited, $ty:ident) => {
        $ty::Inherit
    };
    (reset, $ty:ident) => {
        <$ty as Specified>::initial()
    };
}

macro_rules! is_inherited {
    (inherited) => {
        true
    };
    (reset) => {
        false
    };
}

macro_rules! box_properties {
    (
        $( $variant:ident($ty:ident) => $field:ident, $name:literal, $kind:ident; )+
    ) => {
        /// One parsed longhand declaration.
        #[derive(Clone, Debug, PartialEq)]
        pub enum PropertyValue {
            $( $variant($ty), )+
        }

        impl PropertyValue {
            /// The longhand property name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                }
            }

            /// Whether the property inherits by default.
            pub const fn is_inherited(&self) -> bool {
                match self {
                    $( Self::$variant(_) => is_inherited!($kind), )+
                }
            }
        }

        impl fmt::Display for PropertyValue {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(value) => write!(formatter, "{value}"), )+
                }
            }
        }

        /// Every longhand of one box, specified before `compute` and computed after.
        #[derive(Clone, Debug, PartialEq)]
        pub struct BoxProperties {
            $( pub $field: $ty, )+
        }

        impl Default for BoxProperties {
            fn default() -> Self {
                Self {
                    $( $field: specified_default!($kind, $ty), )+
                }
            }
        }

        impl BoxProperties {
            /// Longhand names in slot order.
            pub const LONGHANDS: &[&str] = &[ $( $name, )+ ];

            /// Store a declaration in its slot; the last write wins.
            pub fn apply(&mut self, value: PropertyValue) {
                match value {
                    $( PropertyValue::$variant(inner) => self.$field = inner, )+
                }
            }

            /// Every slot as `(name, serialized value)` in slot order.
            pub fn entries(&self) -> Vec<(&'static str, String)> {
                vec![ $( ($name, self.$field.to_string()), )+ ]
            }
        }
    };
}

box_properties! {
    BackgroundColor(BackgroundColor) => background_color, "background-color", reset;
    BackgroundImage(BackgroundImage) => background_image, "background-image", reset;
    BackgroundRepeat(BackgroundRepeat) => background_repeat, "background-repeat", reset;
    BackgroundAttachment(BackgroundAttachment) => background_attachment, "background-attachment", reset;
    BackgroundPosition(BackgroundPosition) => background_position, "background-position", reset;
    BackgroundOrigin(BackgroundOrigin) => background_origin, "background-origin", reset;
    BackgroundClip(BackgroundClip) => background_clip, "background-clip", reset;
    BackgroundSize(BackgroundSize) => background_size, "background-size", reset;

    BorderTopColor(BorderColor) => border_top_color, "border-top-color", reset;
    BorderRightColor(BorderColor) => border_right_color, "border-right-color", reset;
    BorderBottomColor(BorderColor) => border_bottom_color, "border-bottom-color", reset;
    BorderLeftColor(BorderColor) => border_left_color, "border-left-color", reset;
    BorderTopStyle(BorderStyle) => border_top_style, "border-top-style", reset;
    BorderRightStyle(BorderStyle) => border_right_style, "border-right-style", reset;
    BorderBottomStyle(BorderStyle) => border_bottom_style, "border-bottom-style", reset;
    BorderLeftStyle(BorderStyle) => border_left_style, "border-left-style", reset;
    BorderTopWidth(BorderWidth) => border_top_width, "border-top-width", reset;
    BorderRightWidth(BorderWidth) => border_right_width, "border-right-width", reset;
    BorderBottomWidth(BorderWidth) => border_bottom_width, "border-bottom-width", reset;
    BorderLeftWidth(BorderWidth) => border_left_width, "border-left-width", reset;
    BorderTopLeftRadius(BorderRadius) => border_top_left_radius, "border-top-left-radius", reset;
    BorderTopRightRadius(BorderRadius) => border_top_right_radius, "border-top-right-radius", reset;
    BorderBottomRightRadius(BorderRadius) => border_bottom_right_radius, "border-bottom-right-radius", reset;
    BorderBottomLeftRadius(BorderRadius) => border_bottom_left_radius, "border-bottom-left-radius", reset;
    BorderImageSource(BorderImageSource) => border_image_source, "border-image-source", reset;
    BorderImageSlice(BorderImageSlice) => border_image_slice, "border-image-slice", reset;
    BorderImageWidth(BorderImageWidth) => border_image_width, "border-image-width", reset;
    BorderImageOutset(BorderImageOutset) => border_image_outset, "border-image-outset", reset;
    BorderImageRepeat(BorderImageRepeat) => border_image_repeat, "border-image-repeat", reset;
    BoxShadow(BoxShadow) => box_shadow, "box-shadow", reset;
    BoxDecorationBreak(BoxDecorationBreak) => box_decoration_break, "box-decoration-break", reset;

    Width(Size) => width, "width", reset;
    Height(Size) => height, "height", reset;
    MinWidth(MinSize) => min_width, "min-width", reset;
    MinHeight(MinSize) => min_height, "min-height", reset;
    MaxWidth(MaxSize) => max_width, "max-width", reset;
    MaxHeight(MaxSize) => max_height, "max-height", reset;
    MarginTop(MarginWidth) => margin_top, "margin-top", reset;
    MarginRight(MarginWidth) => margin_right, "margin-right", reset;
    MarginBottom(MarginWidth) => margin_bottom, "margin-bottom", reset;
    MarginLeft(MarginWidth) => margin_left, "margin-left", reset;
    PaddingTop(PaddingWidth) => padding_top, "padding-top", reset;
    PaddingRight(PaddingWidth) => padding_right, "padding-right", reset;
    PaddingBottom(PaddingWidth) => padding_bottom, "padding-bottom", reset;
    PaddingLeft(PaddingWidth) => padding_left, "padding-left", reset;

    Position(Position) => position, "position", reset;
    Float(Float) => float, "float", reset;
    Clear(Clear) => clear, "clear", reset;
    ZIndex(ZIndex) => z_index, "z-index", reset;
    Top(Inset) => top, "top", reset;
    Right(Inset) => right, "right", reset;
    Bottom(Inset) => bottom, "bottom", reset;
    Left(Inset) => left, "left", reset;
    Overflow(Overflow) => overflow, "overflow", reset;
    Clip(Clip) => clip, "clip", reset;
    Display(Display) => display, "display", reset;
    Visibility(Visibility) => visibility, "visibility", inherited;

    Color(ColorProperty) => color, "color", inherited;
    FontFamily(FontFamily) => font_family, "font-family", inherited;
    FontSize(FontSize) => font_size, "font-size", inherited;
    FontStyle(FontStyle) => font_style, "font-style", inherited;
    FontVariant(FontVariant) => font_variant, "font-variant", inherited;
    FontWeight(FontWeight) => font_weight, "font-weight", inherited;
    LineHeight(LineHeight) => line_height, "line-height", inherited;

    TextAlign(TextAlign) => text_align, "text-align", inherited;
    TextDecoration(TextDecoration) => text_decoration, "text-decoration", reset;
    TextIndent(TextIndent) => text_indent, "text-indent", inherited;
    TextTransform(TextTransform) => text_transform, "text-transform", inherited;
    LetterSpacing(Spacing) => letter_spacing, "letter-spacing", inherited;
    WordSpacing(Spacing) => word_spacing, "word-spacing", inherited;
    WhiteSpace(WhiteSpace) => white_space, "white-space", inherited;
    VerticalAlign(VerticalAlign) => vertical_align, "vertical-align", reset;
    Direction(Direction) => direction, "direction", inherited;
    UnicodeBidi(UnicodeBidi) => unicode_bidi, "unicode-bidi", reset;

    OutlineColor(OutlineColor) => outline_color, "outline-color", reset;
    OutlineStyle(OutlineStyle) => outline_style, "outline-style", reset;
    OutlineWidth(OutlineWidth) => outline_width, "outline-width", reset;
    Cursor(Cursor) => cursor, "cursor", inherited;

    ListStyleType(ListStyleType) => list_style_type, "list-style-type", inherited;
    ListStylePosition(ListStylePosition) => list_style_position, "list-style-position", inherited;
    ListStyleImage(ListStyleImage) => list_style_image, "list-style-image", inherited;
    Content(Content) => content, "content", reset;
    Quotes(Quotes) => quotes, "quotes", inherited;
    CounterIncrement(CounterList) => counter_increment, "counter-increment", reset;
    CounterReset(CounterList) => counter_reset, "counter-reset", reset;

    TableLayout(TableLayout) => table_layout, "table-layout", reset;
    CaptionSide(CaptionSide) => caption_side, "caption-side", inherited;
    BorderCollapse(BorderCollapse) => border_collapse, "border-collapse", inherited;
    BorderSpacing(BorderSpacing) => border_spacing, "border-spacing", inherited;
    EmptyCells(EmptyCells) => empty_cells, "empty-cells", inherited;

    Orphans(LineCount) => orphans, "orphans", inherited;
    Widows(LineCount) => widows, "widows", inherited;
    PageBreakBefore(PageBreak) => page_break_before, "page-break-before", reset;
    PageBreakAfter(PageBreak) => page_break_after, "page-break-after", reset;
    PageBreakInside(PageBreakInside) => page_break_inside, "page-break-inside", reset;

    FlexDirection(FlexDirection) => flex_direction, "flex-direction", reset;
    FlexWrap(FlexWrap) => flex_wrap, "flex-wrap", reset;
    Order(Order) => order, "order", reset;
    FlexGrow(FlexGrow) => flex_grow, "flex-grow", reset;
    FlexShrink(FlexShrink) => flex_shrink, "flex-shrink", reset;
    FlexBasis(FlexBasis) => flex_basis, "flex-basis", reset;
    JustifyContent(JustifyContent) => justify_content, "justify-content", reset;
    AlignItems(AlignItems) => align_items, "align-items", reset;
    AlignSelf(AlignSelf) => align_self, "align-self", reset;
    AlignContent(AlignContent) => align_content, "align-content", reset;

    ClanBoxDirection(ClanBoxDirection) => clan_box_direction, "-clan-box-direction", reset;
    ClanBoxWidthExpandFactor(ClanBoxSizingFactor) => clan_box_width_expand_factor, "-clan-box-width-expand-factor", reset;
    ClanBoxHeightExpandFactor(ClanBoxSizingFactor) => clan_box_height_expand_factor, "-clan-box-height-expand-factor", reset;
    ClanBoxWidthShrinkFactor(ClanBoxSizingFactor) => clan_box_width_shrink_factor, "-clan-box-width-shrink-factor", reset;
    ClanBoxHeightShrinkFactor(ClanBoxSizingFactor) => clan_box_height_shrink_factor, "-clan-box-height-shrink-factor", reset;
}

impl BoxProperties {
    /// Inspection listing, one `name: value` line per slot.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoxProperties {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.entries() {
            writeln!(formatter, "{name}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherited_slots_start_as_inherit() {
        let properties = BoxProperties::default();
        assert!(properties.color.is_inherit());
        assert!(properties.font_size.is_inherit());
        assert!(properties.letter_spacing.is_inherit());
        assert!(!properties.width.is_inherit());
        assert_eq!(properties.display, Display::Inline);
        assert_eq!(properties.outline_style, BorderStyle::None);
    }

    #[test]
    fn apply_overwrites_the_matching_slot() {
        let mut properties = BoxProperties::default();
        properties.apply(PropertyValue::Position(Position::Absolute));
        properties.apply(PropertyValue::Position(Position::Fixed));
        assert_eq!(properties.position, Position::Fixed);
        assert_eq!(properties.float, Float::None);
    }

    #[test]
    fn entries_follow_slot_order() {
        let properties = BoxProperties::default();
        let entries = properties.entries();
        assert_eq!(entries.len(), BoxProperties::LONGHANDS.len());
        assert_eq!(
            entries.first().map(|(name, _)| *name),
            Some("background-color")
        );
        let display = entries.iter().find(|(name, _)| *name == "display");
        assert_eq!(display.map(|(_, value)| value.as_str()), Some("inline"));
    }

    #[test]
    fn value_knows_its_name_and_inheritance() {
        let value = PropertyValue::WordSpacing(Spacing::Normal);
        assert_eq!(value.name(), "word-spacing");
        assert!(value.is_inherited());
        assert!(!PropertyValue::Clear(Clear::Both).is_inherited());
        assert_eq!(value.to_string(), "normal");
    }
}
