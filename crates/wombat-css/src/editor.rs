//! The narrow surface an interactive editing layer drives.
//!
//! The editing UI and the embedded preview live outside this crate; what
//! they need from the model is small: enumerate the gradient variants,
//! read and write [`Background`] fields by name with typed values, and
//! push a freshly rendered block at a preview pane. Everything here is
//! mockable without a UI toolkit.

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};
use thiserror::Error;

use crate::background::{Background, BkgOption};
use crate::color::Rgb;
use crate::descriptor::{BackgroundPosition, BackgroundSize};
use crate::gradient::Gradient;
use crate::keyword::{KeywordSet, parse_keyword};

/// Sample image URLs offered by the preview: a closed list owned by the
/// editing surface, not by the model.
pub const SAMPLE_IMAGES: [&str; 4] = [
    "wrmult.gif",
    "Application.png",
    "Chart.png",
    "mnm_black250.png",
];

/// The gradient variants an editor can offer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum GradientVariant {
    /// [`crate::gradient::AngularGradient`]
    #[default]
    Angular,
    /// [`crate::gradient::LinearGradient`]
    Linear,
    /// [`crate::gradient::RadialGradient`]
    Radial,
}

impl GradientVariant {
    /// Every selectable variant, in menu order.
    pub const ALL: [Self; 3] = [Self::Angular, Self::Linear, Self::Radial];
}

impl KeywordSet for GradientVariant {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// The named field keys of [`Background`], as an editor addresses them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundField {
    /// The `background` shorthand keyword.
    #[default]
    Value,
    /// The solid color.
    Color,
    /// The gradient.
    Gradient,
    /// The size descriptor.
    Size,
    /// The position descriptor.
    Position,
    /// The attachment keyword.
    Attachment,
    /// The clip keyword.
    Clip,
    /// The origin keyword.
    Origin,
    /// The repeat keyword.
    Repeat,
    /// The image keyword.
    ImageOption,
    /// The image URL.
    ImageUrl,
}

impl KeywordSet for BackgroundField {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// A typed value an editor can assign to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A keyword token, parsed against the field's closed set.
    Keyword(String),
    /// A color.
    Color(Rgb),
    /// A gradient.
    Gradient(Gradient),
    /// A size descriptor.
    Size(BackgroundSize),
    /// A position descriptor.
    Position(BackgroundPosition),
    /// Free text (the image URL).
    Text(String),
    /// Clear the field.
    Clear,
}

/// Errors the editing surface can hit. The model itself never fails to
/// render; these only guard the by-name field access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// The field key names no [`Background`] field.
    #[error("unknown background field '{0}'")]
    UnknownField(String),
    /// The keyword text belongs to none of the field's closed set.
    #[error("'{keyword}' is not a valid keyword for field '{field}'")]
    UnknownKeyword {
        /// The field being assigned.
        field: BackgroundField,
        /// The rejected keyword text.
        keyword: String,
    },
    /// The value's type does not fit the field.
    #[error("field '{0}' cannot hold that value type")]
    TypeMismatch(BackgroundField),
}

/// Assign a typed value to a [`Background`] field by key.
///
/// Keyword text is parsed against the target field's closed set; a parse
/// failure surfaces as [`EditorError::UnknownKeyword`] instead of
/// silently substituting the set's default. Color fields are the
/// exception: color text goes through [`Rgb::parse`], whose black
/// fallback is documented model behavior.
///
/// # Errors
///
/// [`EditorError::UnknownField`] for an unrecognized key,
/// [`EditorError::UnknownKeyword`] for keyword text outside the field's
/// set, [`EditorError::TypeMismatch`] when the value type does not fit.
pub fn set_field(
    background: &mut Background,
    field: &str,
    value: FieldValue,
) -> Result<(), EditorError> {
    let (key, ok) = parse_keyword::<BackgroundField>(field);
    if !ok {
        return Err(EditorError::UnknownField(field.to_string()));
    }
    match (key, value) {
        (_, FieldValue::Clear) => clear_field(background, key),
        (BackgroundField::Value, FieldValue::Keyword(text)) => {
            background.value = Some(parse_field_keyword::<BkgOption>(key, &text)?);
        }
        (BackgroundField::Color, FieldValue::Color(color)) => background.color = Some(color),
        (BackgroundField::Color, FieldValue::Keyword(text)) => {
            background.color = Some(Rgb::parse(&text));
        }
        (BackgroundField::Gradient, FieldValue::Gradient(gradient)) => {
            background.gradient = Some(gradient);
        }
        (BackgroundField::Size, FieldValue::Size(size)) => background.size = Some(size),
        (BackgroundField::Position, FieldValue::Position(position)) => {
            background.position = Some(position);
        }
        (BackgroundField::Attachment, FieldValue::Keyword(text)) => {
            background.attachment = Some(parse_field_keyword(key, &text)?);
        }
        (BackgroundField::Clip, FieldValue::Keyword(text)) => {
            background.clip = Some(parse_field_keyword(key, &text)?);
        }
        (BackgroundField::Origin, FieldValue::Keyword(text)) => {
            background.origin = Some(parse_field_keyword(key, &text)?);
        }
        (BackgroundField::Repeat, FieldValue::Keyword(text)) => {
            background.repeat = Some(parse_field_keyword(key, &text)?);
        }
        (BackgroundField::ImageOption, FieldValue::Keyword(text)) => {
            background.image_option = Some(parse_field_keyword(key, &text)?);
        }
        (BackgroundField::ImageUrl, FieldValue::Text(url)) => background.image_url = Some(url),
        (key, _) => return Err(EditorError::TypeMismatch(key)),
    }
    Ok(())
}

/// Read a field back as its rendered text, `None` when unset.
///
/// # Errors
///
/// [`EditorError::UnknownField`] for an unrecognized key.
pub fn field_text(background: &Background, field: &str) -> Result<Option<String>, EditorError> {
    let (key, ok) = parse_keyword::<BackgroundField>(field);
    if !ok {
        return Err(EditorError::UnknownField(field.to_string()));
    }
    let text = match key {
        BackgroundField::Value => background.value.map(KeywordSet::css_token),
        BackgroundField::Color => background.color.as_ref().map(Rgb::render),
        BackgroundField::Gradient => background.gradient.as_ref().map(Gradient::render),
        BackgroundField::Size => background.size.as_ref().map(BackgroundSize::render),
        BackgroundField::Position => background.position.as_ref().map(BackgroundPosition::render),
        BackgroundField::Attachment => background.attachment.map(KeywordSet::css_token),
        BackgroundField::Clip => background.clip.map(KeywordSet::css_token),
        BackgroundField::Origin => background.origin.map(KeywordSet::css_token),
        BackgroundField::Repeat => background.repeat.map(KeywordSet::css_token),
        BackgroundField::ImageOption => background.image_option.map(KeywordSet::css_token),
        BackgroundField::ImageUrl => background.image_url.clone(),
    };
    Ok(text)
}

fn clear_field(background: &mut Background, key: BackgroundField) {
    match key {
        BackgroundField::Value => background.value = None,
        BackgroundField::Color => background.color = None,
        BackgroundField::Gradient => background.gradient = None,
        BackgroundField::Size => background.size = None,
        BackgroundField::Position => background.position = None,
        BackgroundField::Attachment => background.attachment = None,
        BackgroundField::Clip => background.clip = None,
        BackgroundField::Origin => background.origin = None,
        BackgroundField::Repeat => background.repeat = None,
        BackgroundField::ImageOption => background.image_option = None,
        BackgroundField::ImageUrl => background.image_url = None,
    }
}

fn parse_field_keyword<K: KeywordSet>(
    field: BackgroundField,
    text: &str,
) -> Result<K, EditorError> {
    let (value, ok) = parse_keyword(text);
    if ok {
        Ok(value)
    } else {
        Err(EditorError::UnknownKeyword {
            field,
            keyword: text.to_string(),
        })
    }
}

/// A preview pane that accepts a freshly rendered declaration block.
pub trait PreviewSurface {
    /// Receive the new block (no selector attached).
    fn refresh(&mut self, css: &str);
}

/// Render the background and push the block at the preview surface.
/// Returns the block so the caller can persist it as well.
pub fn refresh_preview(background: &Background, surface: &mut dyn PreviewSurface) -> String {
    let css = background.render();
    surface.refresh(&css);
    css
}
