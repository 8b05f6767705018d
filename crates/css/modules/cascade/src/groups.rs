//! Per-family views over `BoxProperties`, so layout and painting code can take
//! the part of the style it reads instead of the whole aggregate.

use crate::BoxProperties;
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

/// One value per box edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Sides<'props, T> {
    pub top: &'props T,
    pub right: &'props T,
    pub bottom: &'props T,
    pub left: &'props T,
}

/// One value per box corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Corners<'props, T> {
    pub top_left: &'props T,
    pub top_right: &'props T,
    pub bottom_right: &'props T,
    pub bottom_left: &'props T,
}

/// Sizing, positioning and the display type.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxModelValues<'props> {
    pub display: &'props Display,
    pub position: &'props Position,
    pub float: &'props Float,
    pub clear: &'props Clear,
    pub z_index: &'props ZIndex,
    pub insets: Sides<'props, Inset>,
    pub width: &'props Size,
    pub height: &'props Size,
    pub min_width: &'props MinSize,
    pub min_height: &'props MinSize,
    pub max_width: &'props MaxSize,
    pub max_height: &'props MaxSize,
    pub overflow: &'props Overflow,
    pub clip: &'props Clip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundValues<'props> {
    pub color: &'props BackgroundColor,
    pub image: &'props BackgroundImage,
    pub repeat: &'props BackgroundRepeat,
    pub attachment: &'props BackgroundAttachment,
    pub position: &'props BackgroundPosition,
    pub origin: &'props BackgroundOrigin,
    pub clip: &'props BackgroundClip,
    pub size: &'props BackgroundSize,
}

/// Border edges, corners, the border image and box decorations.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderValues<'props> {
    pub colors: Sides<'props, BorderColor>,
    pub styles: Sides<'props, BorderStyle>,
    pub widths: Sides<'props, BorderWidth>,
    pub radii: Corners<'props, BorderRadius>,
    pub image_source: &'props BorderImageSource,
    pub image_slice: &'props BorderImageSlice,
    pub image_width: &'props BorderImageWidth,
    pub image_outset: &'props BorderImageOutset,
    pub image_repeat: &'props BorderImageRepeat,
    pub shadow: &'props BoxShadow,
    pub decoration_break: &'props BoxDecorationBreak,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontValues<'props> {
    pub family: &'props FontFamily,
    pub size: &'props FontSize,
    pub style: &'props FontStyle,
    pub variant: &'props FontVariant,
    pub weight: &'props FontWeight,
    pub line_height: &'props LineHeight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextValues<'props> {
    pub align: &'props TextAlign,
    pub decoration: &'props TextDecoration,
    pub indent: &'props TextIndent,
    pub transform: &'props TextTransform,
    pub letter_spacing: &'props Spacing,
    pub word_spacing: &'props Spacing,
    pub white_space: &'props WhiteSpace,
    pub vertical_align: &'props VerticalAlign,
    pub direction: &'props Direction,
    pub unicode_bidi: &'props UnicodeBidi,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableValues<'props> {
    pub layout: &'props TableLayout,
    pub caption_side: &'props CaptionSide,
    pub border_collapse: &'props BorderCollapse,
    pub border_spacing: &'props BorderSpacing,
    pub empty_cells: &'props EmptyCells,
}

/// List markers and generated content.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValues<'props> {
    pub style_type: &'props ListStyleType,
    pub position: &'props ListStylePosition,
    pub image: &'props ListStyleImage,
    pub content: &'props Content,
    pub quotes: &'props Quotes,
    pub counter_increment: &'props CounterList,
    pub counter_reset: &'props CounterList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlexValues<'props> {
    pub direction: &'props FlexDirection,
    pub wrap: &'props FlexWrap,
    pub order: &'props Order,
    pub grow: &'props FlexGrow,
    pub shrink: &'props FlexShrink,
    pub basis: &'props FlexBasis,
    pub justify_content: &'props JustifyContent,
    pub align_items: &'props AlignItems,
    pub align_self: &'props AlignSelf,
    pub align_content: &'props AlignContent,
}

/// `-clan-box` container direction and the item's stretch/shrink weights.
#[derive(Clone, Debug, PartialEq)]
pub struct ClanBoxValues<'props> {
    pub direction: &'props ClanBoxDirection,
    pub width_expand_factor: &'props ClanBoxSizingFactor,
    pub height_expand_factor: &'props ClanBoxSizingFactor,
    pub width_shrink_factor: &'props ClanBoxSizingFactor,
    pub height_shrink_factor: &'props ClanBoxSizingFactor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlineValues<'props> {
    pub color: &'props OutlineColor,
    pub style: &'props OutlineStyle,
    pub width: &'props OutlineWidth,
}

/// Everything that belongs to no other group.
#[derive(Clone, Debug, PartialEq)]
pub struct MiscValues<'props> {
    pub color: &'props ColorProperty,
    pub visibility: &'props Visibility,
    pub cursor: &'props Cursor,
    pub orphans: &'props LineCount,
    pub widows: &'props LineCount,
    pub page_break_before: &'props PageBreak,
    pub page_break_after: &'props PageBreak,
    pub page_break_inside: &'props PageBreakInside,
}

impl BoxProperties {
    pub fn box_model(&self) -> BoxModelValues<'_> {
        BoxModelValues {
            display: &self.display,
            position: &self.position,
            float: &self.float,
            clear: &self.clear,
            z_index: &self.z_index,
            insets: Sides {
                top: &self.top,
                right: &self.right,
                bottom: &self.bottom,
                left: &self.left,
            },
            width: &self.width,
            height: &self.height,
            min_width: &self.min_width,
            min_height: &self.min_height,
            max_width: &self.max_width,
            max_height: &self.max_height,
            overflow: &self.overflow,
            clip: &self.clip,
        }
    }

    pub fn background(&self) -> BackgroundValues<'_> {
        BackgroundValues {
            color: &self.background_color,
            image: &self.background_image,
            repeat: &self.background_repeat,
            attachment: &self.background_attachment,
            position: &self.background_position,
            origin: &self.background_origin,
            clip: &self.background_clip,
            size: &self.background_size,
        }
    }

    pub fn border(&self) -> BorderValues<'_> {
        BorderValues {
            colors: Sides {
                top: &self.border_top_color,
                right: &self.border_right_color,
                bottom: &self.border_bottom_color,
                left: &self.border_left_color,
            },
            styles: Sides {
                top: &self.border_top_style,
                right: &self.border_right_style,
                bottom: &self.border_bottom_style,
                left: &self.border_left_style,
            },
            widths: Sides {
                top: &self.border_top_width,
                right: &self.border_right_width,
                bottom: &self.border_bottom_width,
                left: &self.border_left_width,
            },
            radii: Corners {
                top_left: &self.border_top_left_radius,
                top_right: &self.border_top_right_radius,
                bottom_right: &self.border_bottom_right_radius,
                bottom_left: &self.border_bottom_left_radius,
            },
            image_source: &self.border_image_source,
            image_slice: &self.border_image_slice,
            image_width: &self.border_image_width,
            image_outset: &self.border_image_outset,
            image_repeat: &self.border_image_repeat,
            shadow: &self.box_shadow,
            decoration_break: &self.box_decoration_break,
        }
    }

    pub fn font(&self) -> FontValues<'_> {
        FontValues {
            family: &self.font_family,
            size: &self.font_size,
            style: &self.font_style,
            variant: &self.font_variant,
            weight: &self.font_weight,
            line_height: &self.line_height,
        }
    }

    pub fn text(&self) -> TextValues<'_> {
        TextValues {
            align: &self.text_align,
            decoration: &self.text_decoration,
            indent: &self.text_indent,
            transform: &self.text_transform,
            letter_spacing: &self.letter_spacing,
            word_spacing: &self.word_spacing,
            white_space: &self.white_space,
            vertical_align: &self.vertical_align,
            direction: &self.direction,
            unicode_bidi: &self.unicode_bidi,
        }
    }

    pub fn table(&self) -> TableValues<'_> {
        TableValues {
            layout: &self.table_layout,
            caption_side: &self.caption_side,
            border_collapse: &self.border_collapse,
            border_spacing: &self.border_spacing,
            empty_cells: &self.empty_cells,
        }
    }

    pub fn list_style(&self) -> ListValues<'_> {
        ListValues {
            style_type: &self.list_style_type,
            position: &self.list_style_position,
            image: &self.list_style_image,
            content: &self.content,
            quotes: &self.quotes,
            counter_increment: &self.counter_increment,
            counter_reset: &self.counter_reset,
        }
    }

    pub fn flex(&self) -> FlexValues<'_> {
        FlexValues {
            direction: &self.flex_direction,
            wrap: &self.flex_wrap,
            order: &self.order,
            grow: &self.flex_grow,
            shrink: &self.flex_shrink,
            basis: &self.flex_basis,
            justify_content: &self.justify_content,
            align_items: &self.align_items,
            align_self: &self.align_self,
            align_content: &self.align_content,
        }
    }

    pub fn clan_box(&self) -> ClanBoxValues<'_> {
        ClanBoxValues {
            direction: &self.clan_box_direction,
            width_expand_factor: &self.clan_box_width_expand_factor,
            height_expand_factor: &self.clan_box_height_expand_factor,
            width_shrink_factor: &self.clan_box_width_shrink_factor,
            height_shrink_factor: &self.clan_box_height_shrink_factor,
        }
    }

    pub fn outline(&self) -> OutlineValues<'_> {
        OutlineValues {
            color: &self.outline_color,
            style: &self.outline_style,
            width: &self.outline_width,
        }
    }

    pub fn margin(&self) -> Sides<'_, MarginWidth> {
        Sides {
            top: &self.margin_top,
            right: &self.margin_right,
            bottom: &self.margin_bottom,
            left: &self.margin_left,
        }
    }

    pub fn padding(&self) -> Sides<'_, PaddingWidth> {
        Sides {
            top: &self.padding_top,
            right: &self.padding_right,
            bottom: &self.padding_bottom,
            left: &self.padding_left,
        }
    }

    pub fn misc(&self) -> MiscValues<'_> {
        MiscValues {
            color: &self.color,
            visibility: &self.visibility,
            cursor: &self.cursor,
            orphans: &self.orphans,
            widows: &self.widows,
            page_break_before: &self.page_break_before,
            page_break_after: &self.page_break_after,
            page_break_inside: &self.page_break_inside,
        }
    }
}
