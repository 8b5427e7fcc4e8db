//! The aggregate background declaration builder.
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! [`Background`] composes up to eleven independently optional fields
//! into one multi-line declaration block. Present fields emit one
//! declaration line each (the gradient emits its four-line block), in a
//! fixed order; absent fields contribute nothing. No conflict checking
//! happens between the shorthand and longhand fields: in a stylesheet
//! the last declaration wins, and resolving that is the consumer's call.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};

use crate::color::Rgb;
use crate::descriptor::{BackgroundPosition, BackgroundSize};
use crate::gradient::Gradient;
use crate::keyword::{self, KeywordSet, PropertyKeyword};

/// [§ 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#the-background)
///
/// Direct keyword values for the `background` shorthand itself.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BkgOption {
    /// No background.
    #[default]
    None,
    /// Paint and position relative to the border box.
    BorderBox,
    /// Bottom placement.
    Bottom,
    /// Center placement.
    Center,
    /// Paint and position relative to the content box.
    ContentBox,
    /// Fixed with regard to the viewport.
    Fixed,
    /// Inherits the property from the parent element.
    Inherit,
    /// Resets the property to its default value.
    Initial,
    /// Left placement.
    Left,
    /// Scrolls along with the element's contents.
    Local,
    /// The image is not repeated.
    NoRepeat,
    /// Paint and position relative to the padding box.
    PaddingBox,
    /// The image is repeated both vertically and horizontally.
    Repeat,
    /// The image is repeated only horizontally.
    RepeatX,
    /// The image is repeated only vertically.
    RepeatY,
    /// Right placement.
    Right,
    /// Repetitions are rescaled to fit a whole number of tiles.
    Round,
    /// The background scrolls along with the element.
    Scroll,
    /// Repetitions are spaced out to fill the area.
    Space,
    /// Top placement.
    Top,
}

impl KeywordSet for BkgOption {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BkgOption {
    const PROPERTY: &'static str = "background";
}

/// [§ 3.5 background-attachment](https://www.w3.org/TR/css-backgrounds-3/#the-background-attachment)
///
/// "If background images are specified, this property specifies whether
/// they are fixed with regard to the viewport (fixed) or scroll along
/// with the element (scroll) or its contents (local)."
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundAttachment {
    /// The background scrolls along with the element. This is the default.
    #[default]
    Scroll,
    /// The background is fixed with regard to the viewport.
    Fixed,
    /// The background scrolls along with the element's contents.
    Local,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundAttachment {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundAttachment {
    const PROPERTY: &'static str = "background-attachment";
}

/// [§ 3.7 background-clip](https://www.w3.org/TR/css-backgrounds-3/#the-background-clip)
///
/// "Determines the background painting area."
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundClip {
    /// The background is clipped to the border box. This is the default.
    #[default]
    BorderBox,
    /// The background is clipped to the padding box.
    PaddingBox,
    /// The background is clipped to the content box.
    ContentBox,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundClip {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundClip {
    const PROPERTY: &'static str = "background-clip";
}

/// [§ 3.8 background-origin](https://www.w3.org/TR/css-backgrounds-3/#the-background-origin)
///
/// "Specifies the background positioning area."
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundOrigin {
    /// Positioned relative to the padding box. This is the default.
    #[default]
    PaddingBox,
    /// Positioned relative to the border box.
    BorderBox,
    /// Positioned relative to the content box.
    ContentBox,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundOrigin {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundOrigin {
    const PROPERTY: &'static str = "background-origin";
}

/// [§ 3.4 background-repeat](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
///
/// "Specifies how background images are tiled after they have been sized
/// and positioned."
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundRepeat {
    /// The image is repeated both vertically and horizontally.
    #[default]
    Repeat,
    /// The image is repeated only horizontally.
    RepeatX,
    /// The image is repeated only vertically.
    RepeatY,
    /// The image is not repeated.
    NoRepeat,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundRepeat {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundRepeat {
    const PROPERTY: &'static str = "background-repeat";
}

/// [§ 3.2 background-image](https://www.w3.org/TR/css-backgrounds-3/#the-background-image)
///
/// Keyword values of `background-image` (the URL form is a separate
/// field on [`Background`]).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundImage {
    /// No background image. This is the default.
    #[default]
    None,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundImage {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundImage {
    const PROPERTY: &'static str = "background-image";
}

/// Sets all the background properties in one declaration block.
///
/// Every field is independently optional and independently settable; no
/// field reads another. Rendering an empty builder yields empty text,
/// which is legal by design.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Background {
    /// Keyword value for the `background` shorthand itself.
    pub value: Option<BkgOption>,
    /// Solid `background-color`.
    pub color: Option<Rgb>,
    /// Gradient block (four vendor-prefixed lines).
    pub gradient: Option<Gradient>,
    /// `background-size`.
    pub size: Option<BackgroundSize>,
    /// `background-position`.
    pub position: Option<BackgroundPosition>,
    /// `background-attachment`.
    pub attachment: Option<BackgroundAttachment>,
    /// `background-clip`.
    pub clip: Option<BackgroundClip>,
    /// `background-origin`.
    pub origin: Option<BackgroundOrigin>,
    /// `background-repeat`.
    pub repeat: Option<BackgroundRepeat>,
    /// `background-image` keyword (distinct from the URL field below).
    pub image_option: Option<BackgroundImage>,
    /// `background-image:url('...');` form.
    pub image_url: Option<String>,
}

impl Background {
    /// Render one declaration line per present field, in fixed order,
    /// joined by newlines: shorthand value, color, gradient block, size,
    /// position, attachment, clip, origin, repeat, image keyword, image
    /// URL. No deduplication and no conflict validation happen here.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(value) = self.value {
            lines.push(value.declaration());
        }
        if let Some(color) = &self.color {
            lines.push(keyword::declaration_line("background-color", &color.render()));
        }
        if let Some(gradient) = &self.gradient {
            lines.push(gradient.render());
        }
        if let Some(size) = &self.size {
            lines.push(size.render());
        }
        if let Some(position) = &self.position {
            lines.push(position.render());
        }
        if let Some(attachment) = self.attachment {
            lines.push(attachment.declaration());
        }
        if let Some(clip) = self.clip {
            lines.push(clip.declaration());
        }
        if let Some(origin) = self.origin {
            lines.push(origin.declaration());
        }
        if let Some(repeat) = self.repeat {
            lines.push(repeat.declaration());
        }
        if let Some(image_option) = self.image_option {
            lines.push(image_option.declaration());
        }
        if let Some(image_url) = &self.image_url
            && !image_url.is_empty()
        {
            lines.push(keyword::declaration_line(
                BackgroundImage::PROPERTY,
                &format!("url('{image_url}')"),
            ));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
