//! CSS Backgrounds and Borders Module Level 3.
//! See <https://www.w3.org/TR/css-backgrounds-3/>

#![forbid(unsafe_code)]

// Chapter modules mirroring the css-backgrounds table of contents.
pub mod chapter_3_backgrounds;
pub mod chapter_3_background_shorthand;
pub mod chapter_4_borders;
pub mod chapter_5_corners;
pub mod chapter_6_border_images;
pub mod chapter_7_decorations;

pub use chapter_3_background_shorthand::{BackgroundShorthand, parse_background_shorthand};
pub use chapter_3_backgrounds::{
    Attachment, BackgroundAttachment, BackgroundClip, BackgroundColor, BackgroundImage,
    BackgroundOrigin, BackgroundPosition, BackgroundRepeat, BackgroundSize, BoxArea,
    HorizontalPosition, LayerImage, LayerPosition, LayerRepeat, LayerSize, Layers,
    RepeatStyle, SizeComponent, VerticalPosition,
};
pub use chapter_4_borders::{
    BorderColor, BorderSide, BorderStyle, BorderWidth, parse_border_color_shorthand,
    parse_border_side_shorthand, parse_border_style_shorthand, parse_border_width_shorthand,
};
pub use chapter_5_corners::{BorderRadius, RadiusComponent, parse_border_radius_shorthand};
pub use chapter_6_border_images::{
    BorderImage, BorderImageOutset, BorderImageRepeat, BorderImageSlice, BorderImageSource,
    BorderImageWidth, ImageRepeatKind, ImageWidthValue, OutsetValue, SliceValue,
    parse_border_image_shorthand,
};
pub use chapter_7_decorations::{BoxDecorationBreak, BoxShadow, Shadow};
