//! Specified to computed values for one element.
//! See <https://www.w3.org/TR/CSS21/cascade.html#computed-value>

use crate::ComputeContext;
use css_cascade::BoxProperties;
use css_position::Inset;
use css_values_units::{FontContext, ResourceCache};

/// Resolve every property of an element in place.
pub trait ComputeStyle {
    /// `parent` is the parent's computed style, `None` for the root element.
    fn compute(&mut self, parent: Option<&Self>, resources: &ResourceCache, context: ComputeContext);
}

/// Font context the parent's own lengths were resolved against; for the root,
/// the `medium` font size.
fn parent_font_context(parent: Option<&BoxProperties>, resources: &ResourceCache) -> FontContext {
    parent.map_or_else(
        || resources.root_font_context(),
        |props| {
            let em = props
                .font_size
                .px()
                .unwrap_or_else(|| resources.font_sizes().medium());
            resources.font_context(em, props.font_family.first_name())
        },
    )
}

impl ComputeStyle for BoxProperties {
    fn compute(&mut self, parent: Option<&Self>, resources: &ResourceCache, context: ComputeContext) {
        macro_rules! parent {
            ($field:ident) => {
                parent.map(|props| &props.$field)
            };
        }

        // Font size first: every em/ex below depends on it.
        let parent_font = parent_font_context(parent, resources);
        self.font_size
            .compute(parent!(font_size), resources, parent_font);
        self.font_family.compute(parent!(font_family));
        let em = self
            .font_size
            .px()
            .unwrap_or_else(|| resources.font_sizes().medium());
        let font = resources.font_context(em, self.font_family.first_name());

        self.width
            .compute(parent!(width), font, context.containing_block_width_auto);
        self.height
            .compute(parent!(height), font, context.containing_block_height_auto);

        self.color.compute(parent!(color), resources);
        let color = self.color.color();
        self.position.compute(parent!(position));
        self.float.compute(parent!(float));
        self.display
            .compute_with(parent!(display), self.position, self.float);

        Inset::compute_horizontal(
            &mut self.left,
            &mut self.right,
            parent.map(|props| (&props.left, &props.right)),
            font,
            self.position,
            context.ltr,
        );
        Inset::compute_vertical(
            &mut self.top,
            &mut self.bottom,
            parent.map(|props| (&props.top, &props.bottom)),
            font,
            self.position,
        );

        self.white_space.compute(parent!(white_space));

        self.margin_top.compute(parent!(margin_top), font);
        self.margin_right.compute(parent!(margin_right), font);
        self.margin_bottom.compute(parent!(margin_bottom), font);
        self.margin_left.compute(parent!(margin_left), font);

        self.border_top_color.compute(parent!(border_top_color), color);
        self.border_right_color
            .compute(parent!(border_right_color), color);
        self.border_bottom_color
            .compute(parent!(border_bottom_color), color);
        self.border_left_color
            .compute(parent!(border_left_color), color);

        self.border_top_style.compute(parent!(border_top_style));
        self.border_right_style.compute(parent!(border_right_style));
        self.border_bottom_style
            .compute(parent!(border_bottom_style));
        self.border_left_style.compute(parent!(border_left_style));

        self.border_top_width
            .compute(parent!(border_top_width), font, self.border_top_style);
        self.border_right_width
            .compute(parent!(border_right_width), font, self.border_right_style);
        self.border_bottom_width
            .compute(parent!(border_bottom_width), font, self.border_bottom_style);
        self.border_left_width
            .compute(parent!(border_left_width), font, self.border_left_style);

        self.border_top_left_radius
            .compute(parent!(border_top_left_radius), font);
        self.border_top_right_radius
            .compute(parent!(border_top_right_radius), font);
        self.border_bottom_right_radius
            .compute(parent!(border_bottom_right_radius), font);
        self.border_bottom_left_radius
            .compute(parent!(border_bottom_left_radius), font);

        self.border_image_source
            .compute(parent!(border_image_source));
        self.border_image_slice.compute(parent!(border_image_slice));
        self.border_image_width
            .compute(parent!(border_image_width), font);
        self.border_image_outset
            .compute(parent!(border_image_outset), font);
        self.border_image_repeat
            .compute(parent!(border_image_repeat));
        self.box_decoration_break
            .compute(parent!(box_decoration_break));
        self.box_shadow.compute(parent!(box_shadow), font, color);

        self.background_color.compute(parent!(background_color));
        self.background_image.compute(parent!(background_image));
        self.background_repeat.compute(parent!(background_repeat));
        self.background_attachment
            .compute(parent!(background_attachment));
        self.background_position
            .compute(parent!(background_position), font);
        self.background_origin.compute(parent!(background_origin));
        self.background_clip.compute(parent!(background_clip));
        self.background_size
            .compute(parent!(background_size), font);

        self.padding_top.compute(parent!(padding_top), font);
        self.padding_right.compute(parent!(padding_right), font);
        self.padding_bottom.compute(parent!(padding_bottom), font);
        self.padding_left.compute(parent!(padding_left), font);

        self.max_width.compute(parent!(max_width), font);
        self.max_height.compute(parent!(max_height), font);
        self.min_width.compute(parent!(min_width), font);
        self.min_height.compute(parent!(min_height), font);

        self.z_index.compute(parent!(z_index));
        self.clear.compute(parent!(clear));
        self.clip.compute(parent!(clip), font);
        self.overflow.compute(parent!(overflow));

        self.counter_increment.compute(parent!(counter_increment));
        self.counter_reset.compute(parent!(counter_reset));
        self.cursor.compute(parent!(cursor));

        self.outline_color.compute(parent!(outline_color), color);
        self.outline_style.compute(parent!(outline_style));
        self.outline_width
            .compute(parent!(outline_width), font, self.outline_style);

        self.content.compute(parent!(content));

        self.text_decoration.compute(parent!(text_decoration));
        self.text_indent.compute(parent!(text_indent), font);
        self.text_transform.compute(parent!(text_transform));
        self.text_align.compute(parent!(text_align));

        self.font_style.compute(parent!(font_style));
        self.font_variant.compute(parent!(font_variant));
        self.font_weight.compute(parent!(font_weight));

        self.letter_spacing.compute(parent!(letter_spacing), font);
        self.word_spacing.compute(parent!(word_spacing), font);
        self.line_height.compute(parent!(line_height), font);
        self.quotes.compute(parent!(quotes), resources);
        self.direction.compute(parent!(direction));
        self.unicode_bidi.compute(parent!(unicode_bidi));

        self.orphans.compute(parent!(orphans));
        self.widows.compute(parent!(widows));
        self.page_break_before.compute(parent!(page_break_before));
        self.page_break_after.compute(parent!(page_break_after));
        self.page_break_inside.compute(parent!(page_break_inside));

        self.list_style_type.compute(parent!(list_style_type));
        self.list_style_position
            .compute(parent!(list_style_position));
        self.list_style_image.compute(parent!(list_style_image));

        self.table_layout.compute(parent!(table_layout));
        self.caption_side.compute(parent!(caption_side));
        self.border_collapse.compute(parent!(border_collapse));
        self.border_spacing.compute(parent!(border_spacing), font);
        self.empty_cells.compute(parent!(empty_cells));

        self.flex_direction.compute(parent!(flex_direction));
        self.flex_wrap.compute(parent!(flex_wrap));
        self.order.compute(parent!(order));
        self.flex_grow.compute(parent!(flex_grow));
        self.flex_shrink.compute(parent!(flex_shrink));
        self.flex_basis.compute(parent!(flex_basis), font);
        self.justify_content.compute(parent!(justify_content));
        self.align_items.compute(parent!(align_items));
        self.align_self.compute(parent!(align_self));
        self.align_content.compute(parent!(align_content));

        self.clan_box_direction.compute(parent!(clan_box_direction));
        self.clan_box_width_expand_factor
            .compute(parent!(clan_box_width_expand_factor));
        self.clan_box_height_expand_factor
            .compute(parent!(clan_box_height_expand_factor));
        self.clan_box_width_shrink_factor
            .compute(parent!(clan_box_width_shrink_factor));
        self.clan_box_height_shrink_factor
            .compute(parent!(clan_box_height_shrink_factor));

        self.vertical_align
            .compute(parent!(vertical_align), resources, font, &self.line_height);
        self.visibility.compute(parent!(visibility));
    }
}
