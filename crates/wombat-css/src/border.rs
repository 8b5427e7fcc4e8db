//! CSS border declarations.
//!
//! [CSS Backgrounds and Borders Level 3 § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};

use crate::color::Rgb;
use crate::keyword::{self, KeywordSet, PropertyKeyword};
use crate::unit::{Direction, WidthUnit};
use crate::vendor::Vendor;

/// [§ 4.2 border-style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "Value: none | hidden | dotted | dashed | solid | double | groove |
/// ridge | inset | outset"
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BorderStyle {
    /// No border. This is the default.
    #[default]
    None,
    /// Same as `none`, except in border conflict resolution for tables.
    Hidden,
    /// A dotted border.
    Dotted,
    /// A dashed border.
    Dashed,
    /// A solid border.
    Solid,
    /// A double border.
    Double,
    /// A 3D grooved border.
    Groove,
    /// A 3D ridged border.
    Ridge,
    /// A 3D inset border.
    Inset,
    /// A 3D outset border.
    Outset,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BorderStyle {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BorderStyle {
    const PROPERTY: &'static str = "border-style";
}

/// A border shorthand declaration, optionally scoped to one side.
///
/// Renders `border[-<side>]:<width> <style> <color>;` with only the
/// present parts, space-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Border {
    /// The side the declaration targets (`border-left:` and so on).
    /// `None` leaves the all-sides `border:` property; `center` is not a
    /// border side and does the same.
    pub side: Option<Direction>,
    /// Border width, numeric or a width-class keyword.
    pub width: Option<WidthUnit>,
    /// Line style.
    pub style: Option<BorderStyle>,
    /// Line color.
    pub color: Option<Rgb>,
}

impl Border {
    /// Render the declaration line, emitting only present parts.
    #[must_use]
    pub fn render(&self) -> String {
        let property = match self.side {
            Some(side) if side != Direction::Center => format!("border-{}", side.css_token()),
            _ => "border".to_string(),
        };
        let mut parts = Vec::new();
        if let Some(width) = &self.width {
            parts.push(width.render(Vendor::Standard));
        }
        if let Some(style) = self.style {
            parts.push(style.css_token());
        }
        if let Some(color) = &self.color {
            parts.push(color.render());
        }
        keyword::declaration_line(&property, &parts.join(" "))
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
