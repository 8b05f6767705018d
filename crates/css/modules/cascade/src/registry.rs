//! Property-name dispatch: every longhand and shorthand name maps to a parser
//! producing the longhand values it sets.
//! See <https://www.w3.org/TR/css-cascade-4/#shorthand>

use crate::{BoxProperties, PropertyValue};
use css_backgrounds_borders::{
    BackgroundAttachment, BackgroundClip, BackgroundColor, BackgroundImage, BackgroundOrigin,
    BackgroundPosition, BackgroundRepeat, BackgroundSize, BorderColor, BorderImageOutset,
    BorderImageRepeat, BorderImageSlice, BorderImageSource, BorderImageWidth, BorderRadius,
    BorderStyle, BorderWidth, BoxDecorationBreak, BoxShadow, parse_background_shorthand,
    parse_border_color_shorthand, parse_border_image_shorthand, parse_border_radius_shorthand,
    parse_border_side_shorthand, parse_border_style_shorthand, parse_border_width_shorthand,
};
use css_box::{
    ClanBoxDirection, ClanBoxSizingFactor, MarginWidth, MaxSize, MinSize, PaddingWidth, Size,
    parse_margin_shorthand, parse_padding_shorthand,
};
use css_break::{LineCount, PageBreak, PageBreakInside};
use css_color::ColorProperty;
use css_display::{Display, Visibility};
use css_flexbox::{
    AlignContent, AlignItems, AlignSelf, FlexBasis, FlexDirection, FlexGrow, FlexShrink, FlexWrap,
    JustifyContent, Order, parse_flex_flow_shorthand, parse_flex_shorthand,
};
use css_fonts::{
    FontFamily, FontSize, FontStyle, FontVariant, FontWeight, LineHeight, parse_font_shorthand,
};
use css_lists::{
    Content, CounterList, ListStyleImage, ListStylePosition, ListStyleType, Quotes,
    parse_list_style_shorthand,
};
use css_position::{Clear, Clip, Float, Inset, Overflow, Position, ZIndex};
use css_style_attr::{Declaration, parse_style_attribute};
use css_tables::{BorderCollapse, BorderSpacing, CaptionSide, EmptyCells, TableLayout};
use css_text::{
    Direction, Spacing, TextAlign, TextDecoration, TextIndent, TextTransform, UnicodeBidi,
    VerticalAlign, WhiteSpace,
};
use css_ui::{Cursor, OutlineColor, OutlineWidth, parse_outline_shorthand, parse_outline_style};
use css_values_units::ParseError;
use css_values_units::cssparser::{Parser, ParserInput};
use std::collections::{BTreeSet, HashMap};

/// Parser for one property name. It may leave tokens behind; the registry
/// rejects the declaration in that case.
pub type PropertyParser = fn(&mut Parser<'_, '_>) -> Result<Vec<PropertyValue>, ParseError>;

/// Longhand names touched while applying declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changed: BTreeSet<&'static str>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str) {
        self.changed.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.changed.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changed.len()
    }

    /// Changed names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.changed.iter().copied()
    }

    pub fn clear(&mut self) {
        self.changed.clear();
    }
}

fn parse_exhaustively(
    parser: PropertyParser,
    input: &mut Parser<'_, '_>,
) -> Result<Vec<PropertyValue>, ParseError> {
    let values = parser(input)?;
    input.expect_exhausted()?;
    Ok(values)
}

macro_rules! longhands {
    ($registry:ident; $( $name:literal => $variant:ident($parse:path) ),+ $(,)?) => {
        $(
            $registry.register(&[$name], |input| {
                Ok(vec![PropertyValue::$variant($parse(input)?)])
            });
        )+
    };
}

/// Lookup table from property name to parser.
#[derive(Clone, Debug, Default)]
pub struct PropertyParsers {
    parsers: HashMap<String, PropertyParser>,
}

impl PropertyParsers {
    /// Registry with every supported longhand and shorthand.
    pub fn build() -> Self {
        let mut registry = Self::default();
        registry.register_longhands();
        registry.register_shorthands();
        log::debug!("property registry built with {} names", registry.len());
        registry
    }

    /// Map each of `names` (case-insensitively) to `parser`, replacing any previous entry.
    pub fn register(&mut self, names: &[&str], parser: PropertyParser) {
        for name in names {
            self.parsers.insert(name.to_ascii_lowercase(), parser);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parse `value` as property `name`.
    ///
    /// Unknown names, grammar errors and trailing tokens all yield an empty list;
    /// a shorthand either yields every longhand it sets or nothing.
    pub fn parse(&self, name: &str, value: &str) -> Vec<PropertyValue> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        self.parse_tokens(name, &mut parser)
    }

    /// Same as `parse`, over an existing token stream that must be consumed entirely.
    pub fn parse_tokens(&self, name: &str, input: &mut Parser<'_, '_>) -> Vec<PropertyValue> {
        let Some(parser) = self.parsers.get(&name.to_ascii_lowercase()) else {
            log::debug!("dropping declaration for unknown property `{name}`");
            return Vec::new();
        };
        match parse_exhaustively(*parser, input) {
            Ok(values) => values,
            Err(error) => {
                log::debug!("dropping `{name}` declaration: {error}");
                Vec::new()
            }
        }
    }

    /// Apply one declaration to `properties`. Returns whether anything was set.
    pub fn apply(
        &self,
        properties: &mut BoxProperties,
        declaration: &Declaration,
        mut change_set: Option<&mut ChangeSet>,
    ) -> bool {
        let values = self.parse(&declaration.property, &declaration.value);
        if values.is_empty() {
            return false;
        }
        for value in values {
            log::trace!("{}: {value}", value.name());
            if let Some(changes) = change_set.as_deref_mut() {
                changes.record(value.name());
            }
            properties.apply(value);
        }
        true
    }

    /// Apply declarations in order, `!important` ones after the normal ones.
    /// Returns the number of declarations applied.
    pub fn apply_declarations(
        &self,
        properties: &mut BoxProperties,
        declarations: &[Declaration],
        mut change_set: Option<&mut ChangeSet>,
    ) -> usize {
        let normal = declarations.iter().filter(|declaration| !declaration.important);
        let important = declarations.iter().filter(|declaration| declaration.important);
        let mut applied = 0;
        for declaration in normal.chain(important) {
            if self.apply(properties, declaration, change_set.as_deref_mut()) {
                applied += 1;
            }
        }
        applied
    }

    /// Parse a declaration block and apply it with `apply_declarations`.
    pub fn apply_style(
        &self,
        properties: &mut BoxProperties,
        style_text: &str,
        change_set: Option<&mut ChangeSet>,
    ) -> usize {
        let declarations = parse_style_attribute(style_text);
        self.apply_declarations(properties, &declarations, change_set)
    }

    fn register_longhands(&mut self) {
        longhands! { self;
            "background-color" => BackgroundColor(BackgroundColor::parse),
            "background-image" => BackgroundImage(BackgroundImage::parse),
            "background-repeat" => BackgroundRepeat(BackgroundRepeat::parse),
            "background-attachment" => BackgroundAttachment(BackgroundAttachment::parse),
            "background-position" => BackgroundPosition(BackgroundPosition::parse),
            "background-origin" => BackgroundOrigin(BackgroundOrigin::parse),
            "background-clip" => BackgroundClip(BackgroundClip::parse),
            "background-size" => BackgroundSize(BackgroundSize::parse),

            "border-top-color" => BorderTopColor(BorderColor::parse),
            "border-right-color" => BorderRightColor(BorderColor::parse),
            "border-bottom-color" => BorderBottomColor(BorderColor::parse),
            "border-left-color" => BorderLeftColor(BorderColor::parse),
            "border-top-style" => BorderTopStyle(BorderStyle::parse),
            "border-right-style" => BorderRightStyle(BorderStyle::parse),
            "border-bottom-style" => BorderBottomStyle(BorderStyle::parse),
            "border-left-style" => BorderLeftStyle(BorderStyle::parse),
            "border-top-width" => BorderTopWidth(BorderWidth::parse),
            "border-right-width" => BorderRightWidth(BorderWidth::parse),
            "border-bottom-width" => BorderBottomWidth(BorderWidth::parse),
            "border-left-width" => BorderLeftWidth(BorderWidth::parse),
            "border-top-left-radius" => BorderTopLeftRadius(BorderRadius::parse),
            "border-top-right-radius" => BorderTopRightRadius(BorderRadius::parse),
            "border-bottom-right-radius" => BorderBottomRightRadius(BorderRadius::parse),
            "border-bottom-left-radius" => BorderBottomLeftRadius(BorderRadius::parse),
            "border-image-source" => BorderImageSource(BorderImageSource::parse),
            "border-image-slice" => BorderImageSlice(BorderImageSlice::parse),
            "border-image-width" => BorderImageWidth(BorderImageWidth::parse),
            "border-image-outset" => BorderImageOutset(BorderImageOutset::parse),
            "border-image-repeat" => BorderImageRepeat(BorderImageRepeat::parse),
            "box-shadow" => BoxShadow(BoxShadow::parse),
            "box-decoration-break" => BoxDecorationBreak(BoxDecorationBreak::parse),

            "width" => Width(Size::parse),
            "height" => Height(Size::parse),
            "min-width" => MinWidth(MinSize::parse),
            "min-height" => MinHeight(MinSize::parse),
            "max-width" => MaxWidth(MaxSize::parse),
            "max-height" => MaxHeight(MaxSize::parse),
            "margin-top" => MarginTop(MarginWidth::parse),
            "margin-right" => MarginRight(MarginWidth::parse),
            "margin-bottom" => MarginBottom(MarginWidth::parse),
            "margin-left" => MarginLeft(MarginWidth::parse),
            "padding-top" => PaddingTop(PaddingWidth::parse),
            "padding-right" => PaddingRight(PaddingWidth::parse),
            "padding-bottom" => PaddingBottom(PaddingWidth::parse),
            "padding-left" => PaddingLeft(PaddingWidth::parse),

            "position" => Position(Position::parse),
            "float" => Float(Float::parse),
            "clear" => Clear(Clear::parse),
            "z-index" => ZIndex(ZIndex::parse),
            "top" => Top(Inset::parse),
            "right" => Right(Inset::parse),
            "bottom" => Bottom(Inset::parse),
            "left" => Left(Inset::parse),
            "overflow" => Overflow(Overflow::parse),
            "clip" => Clip(Clip::parse),
            "display" => Display(Display::parse),
            "visibility" => Visibility(Visibility::parse),

            "color" => Color(ColorProperty::parse),
            "font-family" => FontFamily(FontFamily::parse),
            "font-size" => FontSize(FontSize::parse),
            "font-style" => FontStyle(FontStyle::parse),
            "font-variant" => FontVariant(FontVariant::parse),
            "font-weight" => FontWeight(FontWeight::parse),
            "line-height" => LineHeight(LineHeight::parse),

            "text-align" => TextAlign(TextAlign::parse),
            "text-decoration" => TextDecoration(TextDecoration::parse),
            "text-indent" => TextIndent(TextIndent::parse),
            "text-transform" => TextTransform(TextTransform::parse),
            "letter-spacing" => LetterSpacing(Spacing::parse),
            "word-spacing" => WordSpacing(Spacing::parse),
            "white-space" => WhiteSpace(WhiteSpace::parse),
            "vertical-align" => VerticalAlign(VerticalAlign::parse),
            "direction" => Direction(Direction::parse),
            "unicode-bidi" => UnicodeBidi(UnicodeBidi::parse),

            "outline-color" => OutlineColor(OutlineColor::parse),
            "outline-style" => OutlineStyle(parse_outline_style),
            "outline-width" => OutlineWidth(OutlineWidth::parse),
            "cursor" => Cursor(Cursor::parse),

            "list-style-type" => ListStyleType(ListStyleType::parse),
            "list-style-position" => ListStylePosition(ListStylePosition::parse),
            "list-style-image" => ListStyleImage(ListStyleImage::parse),
            "content" => Content(Content::parse),
            "quotes" => Quotes(Quotes::parse),
            "counter-increment" => CounterIncrement(CounterList::parse_increment),
            "counter-reset" => CounterReset(CounterList::parse_reset),

            "table-layout" => TableLayout(TableLayout::parse),
            "caption-side" => CaptionSide(CaptionSide::parse),
            "border-collapse" => BorderCollapse(BorderCollapse::parse),
            "border-spacing" => BorderSpacing(BorderSpacing::parse),
            "empty-cells" => EmptyCells(EmptyCells::parse),

            "orphans" => Orphans(LineCount::parse),
            "widows" => Widows(LineCount::parse),
            "page-break-before" => PageBreakBefore(PageBreak::parse),
            "page-break-after" => PageBreakAfter(PageBreak::parse),
            "page-break-inside" => PageBreakInside(PageBreakInside::parse),

            "flex-direction" => FlexDirection(FlexDirection::parse),
            "flex-wrap" => FlexWrap(FlexWrap::parse),
            "order" => Order(Order::parse),
            "flex-grow" => FlexGrow(FlexGrow::parse),
            "flex-shrink" => FlexShrink(FlexShrink::parse),
            "flex-basis" => FlexBasis(FlexBasis::parse),
            "justify-content" => JustifyContent(JustifyContent::parse),
            "align-items" => AlignItems(AlignItems::parse),
            "align-self" => AlignSelf(AlignSelf::parse),
            "align-content" => AlignContent(AlignContent::parse),

            "-clan-box-direction" => ClanBoxDirection(ClanBoxDirection::parse),
            "-clan-box-width-expand-factor" => ClanBoxWidthExpandFactor(ClanBoxSizingFactor::parse),
            "-clan-box-height-expand-factor" => ClanBoxHeightExpandFactor(ClanBoxSizingFactor::parse),
            "-clan-box-width-shrink-factor" => ClanBoxWidthShrinkFactor(ClanBoxSizingFactor::parse),
            "-clan-box-height-shrink-factor" => ClanBoxHeightShrinkFactor(ClanBoxSizingFactor::parse),
        }
    }

    fn register_shorthands(&mut self) {
        self.register(&["background"], |input| {
            let background = parse_background_shorthand(input)?;
            Ok(vec![
                PropertyValue::BackgroundColor(background.color),
                PropertyValue::BackgroundImage(background.image),
                PropertyValue::BackgroundRepeat(background.repeat),
                PropertyValue::BackgroundAttachment(background.attachment),
                PropertyValue::BackgroundPosition(background.position),
                PropertyValue::BackgroundOrigin(background.origin),
                PropertyValue::BackgroundClip(background.clip),
                PropertyValue::BackgroundSize(background.size),
            ])
        });
        self.register(&["font"], |input| {
            let font = parse_font_shorthand(input)?;
            Ok(vec![
                PropertyValue::FontStyle(font.style),
                PropertyValue::FontVariant(font.variant),
                PropertyValue::FontWeight(font.weight),
                PropertyValue::FontSize(font.size),
                PropertyValue::LineHeight(font.line_height),
                PropertyValue::FontFamily(font.family),
            ])
        });
        self.register(&["border"], |input| {
            let side = parse_border_side_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopWidth(side.width),
                PropertyValue::BorderRightWidth(side.width),
                PropertyValue::BorderBottomWidth(side.width),
                PropertyValue::BorderLeftWidth(side.width),
                PropertyValue::BorderTopStyle(side.style),
                PropertyValue::BorderRightStyle(side.style),
                PropertyValue::BorderBottomStyle(side.style),
                PropertyValue::BorderLeftStyle(side.style),
                PropertyValue::BorderTopColor(side.color),
                PropertyValue::BorderRightColor(side.color),
                PropertyValue::BorderBottomColor(side.color),
                PropertyValue::BorderLeftColor(side.color),
            ])
        });
        self.register(&["border-top"], |input| {
            let side = parse_border_side_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopWidth(side.width),
                PropertyValue::BorderTopStyle(side.style),
                PropertyValue::BorderTopColor(side.color),
            ])
        });
        self.register(&["border-right"], |input| {
            let side = parse_border_side_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderRightWidth(side.width),
                PropertyValue::BorderRightStyle(side.style),
                PropertyValue::BorderRightColor(side.color),
            ])
        });
        self.register(&["border-bottom"], |input| {
            let side = parse_border_side_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderBottomWidth(side.width),
                PropertyValue::BorderBottomStyle(side.style),
                PropertyValue::BorderBottomColor(side.color),
            ])
        });
        self.register(&["border-left"], |input| {
            let side = parse_border_side_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderLeftWidth(side.width),
                PropertyValue::BorderLeftStyle(side.style),
                PropertyValue::BorderLeftColor(side.color),
            ])
        });
        self.register(&["border-color"], |input| {
            let [top, right, bottom, left] = parse_border_color_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopColor(top),
                PropertyValue::BorderRightColor(right),
                PropertyValue::BorderBottomColor(bottom),
                PropertyValue::BorderLeftColor(left),
            ])
        });
        self.register(&["border-style"], |input| {
            let [top, right, bottom, left] = parse_border_style_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopStyle(top),
                PropertyValue::BorderRightStyle(right),
                PropertyValue::BorderBottomStyle(bottom),
                PropertyValue::BorderLeftStyle(left),
            ])
        });
        self.register(&["border-width"], |input| {
            let [top, right, bottom, left] = parse_border_width_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopWidth(top),
                PropertyValue::BorderRightWidth(right),
                PropertyValue::BorderBottomWidth(bottom),
                PropertyValue::BorderLeftWidth(left),
            ])
        });
        self.register(&["border-radius"], |input| {
            let [top_left, top_right, bottom_right, bottom_left] =
                parse_border_radius_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderTopLeftRadius(top_left),
                PropertyValue::BorderTopRightRadius(top_right),
                PropertyValue::BorderBottomRightRadius(bottom_right),
                PropertyValue::BorderBottomLeftRadius(bottom_left),
            ])
        });
        self.register(&["border-image"], |input| {
            let image = parse_border_image_shorthand(input)?;
            Ok(vec![
                PropertyValue::BorderImageSource(image.source),
                PropertyValue::BorderImageSlice(image.slice),
                PropertyValue::BorderImageWidth(image.width),
                PropertyValue::BorderImageOutset(image.outset),
                PropertyValue::BorderImageRepeat(image.repeat),
            ])
        });
        self.register(&["margin"], |input| {
            let [top, right, bottom, left] = parse_margin_shorthand(input)?;
            Ok(vec![
                PropertyValue::MarginTop(top),
                PropertyValue::MarginRight(right),
                PropertyValue::MarginBottom(bottom),
                PropertyValue::MarginLeft(left),
            ])
        });
        self.register(&["padding"], |input| {
            let [top, right, bottom, left] = parse_padding_shorthand(input)?;
            Ok(vec![
                PropertyValue::PaddingTop(top),
                PropertyValue::PaddingRight(right),
                PropertyValue::PaddingBottom(bottom),
                PropertyValue::PaddingLeft(left),
            ])
        });
        self.register(&["outline"], |input| {
            let outline = parse_outline_shorthand(input)?;
            Ok(vec![
                PropertyValue::OutlineColor(outline.color),
                PropertyValue::OutlineStyle(outline.style),
                PropertyValue::OutlineWidth(outline.width),
            ])
        });
        self.register(&["list-style"], |input| {
            let list = parse_list_style_shorthand(input)?;
            Ok(vec![
                PropertyValue::ListStyleType(list.style_type),
                PropertyValue::ListStylePosition(list.position),
                PropertyValue::ListStyleImage(list.image),
            ])
        });
        self.register(&["flex-flow"], |input| {
            let flow = parse_flex_flow_shorthand(input)?;
            Ok(vec![
                PropertyValue::FlexDirection(flow.direction),
                PropertyValue::FlexWrap(flow.wrap),
            ])
        });
        self.register(&["flex"], |input| {
            let flex = parse_flex_shorthand(input)?;
            Ok(vec![
                PropertyValue::FlexGrow(flex.grow),
                PropertyValue::FlexShrink(flex.shrink),
                PropertyValue::FlexBasis(flex.basis),
            ])
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_longhand_has_a_parser() {
        let registry = PropertyParsers::build();
        for name in BoxProperties::LONGHANDS {
            assert!(registry.contains(name), "no parser for {name}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = PropertyParsers::build();
        let values = registry.parse("Z-INDEX", "3");
        assert_eq!(values.len(), 1);
        assert_eq!(values.first().map(PropertyValue::name), Some("z-index"));
    }

    #[test]
    fn trailing_tokens_reject_the_declaration() {
        let registry = PropertyParsers::build();
        assert!(registry.parse("display", "block inline").is_empty());
        assert!(registry.parse("no-such-property", "1px").is_empty());
    }

    #[test]
    fn registering_again_replaces_the_parser() {
        let mut registry = PropertyParsers::default();
        registry.register(&["Clear"], |_| Ok(Vec::new()));
        registry.register(&["clear"], |input| {
            Ok(vec![PropertyValue::Clear(Clear::parse(input)?)])
        });
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.parse("clear", "both"),
            vec![PropertyValue::Clear(Clear::Both)]
        );
    }

    #[test]
    fn change_set_records_each_longhand_once() {
        let registry = PropertyParsers::build();
        let mut properties = BoxProperties::default();
        let mut changes = ChangeSet::new();
        let applied = registry.apply_style(
            &mut properties,
            "margin: 1px; margin-top: 2px",
            Some(&mut changes),
        );
        assert_eq!(applied, 2);
        assert_eq!(changes.len(), 4);
        assert!(changes.contains("margin-top"));
        assert!(!changes.contains("padding-top"));
    }
}
