//! CSS color values.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;

use serde::Serialize;

use wombat_common::warning::warn_once;

use crate::unit::Unit;
use crate::vendor::Vendor;

/// Output notation for [`Rgb`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ColorMode {
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// `#RRGGBB` notation. The opacity channel is not representable in
    /// six digits and is ignored, consistent with standard HTML color
    /// translation.
    #[default]
    Hex,
    /// `rgba(r,g,b,o)` functional notation with the opacity last.
    Rgba,
}

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// sRGB color with a stored alpha complement and an optional trailing
/// measurement (used for gradient color-stop positions).
///
/// The alpha channel is stored as `255 − opacity`, so `a == 0` is fully
/// opaque and `a == 255` is fully transparent. Use [`Rgb::opacity`] and
/// [`Rgb::set_opacity`] to work in opacity terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// Stored alpha complement: `255 − opacity`. `0` is fully opaque.
    pub a: u8,
    /// Optional trailing measurement appended after a single space.
    pub unit: Option<Unit>,
    /// Output notation.
    pub mode: ColorMode,
}

impl Rgb {
    /// Opaque black (#000000), the documented fallback for unparsable
    /// color input.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
        unit: None,
        mode: ColorMode::Hex,
    };

    /// An opaque color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: 0,
            unit: None,
            mode: ColorMode::Hex,
        }
    }

    /// A color from channel values and an opacity (255 = fully opaque).
    #[must_use]
    pub const fn with_opacity(r: u8, g: u8, b: u8, opacity: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: 255 - opacity,
            unit: None,
            mode: ColorMode::Hex,
        }
    }

    /// The opacity (255 − stored alpha complement).
    #[must_use]
    pub const fn opacity(&self) -> u8 {
        255 - self.a
    }

    /// Set the opacity; the complement is what gets stored.
    pub const fn set_opacity(&mut self, opacity: u8) {
        self.a = 255 - opacity;
    }

    /// Attach a trailing measurement rendered after the color.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Switch to `rgba(...)` output notation.
    #[must_use]
    pub fn rgba(mut self) -> Self {
        self.mode = ColorMode::Rgba;
        self
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The three-digit RGB notation (#RGB) is converted into six-digit
    /// form (#RRGGBB) by replicating digits, not by adding zeros."
    ///
    /// Accepts the 3- and 6-digit forms, with or without the leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The 16 basic HTML colors plus `transparent` and the `gray`/`grey`
    /// aliasing. Matching is ASCII case-insensitive.
    pub fn from_named(name: &str) -> Option<Self> {
        let (r, g, b) = match name.to_ascii_lowercase().as_str() {
            "white" => (255, 255, 255),
            "silver" => (192, 192, 192),
            "gray" | "grey" => (128, 128, 128),
            "black" => (0, 0, 0),
            "red" => (255, 0, 0),
            "maroon" => (128, 0, 0),
            "yellow" => (255, 255, 0),
            "olive" => (128, 128, 0),
            "lime" => (0, 255, 0),
            "green" => (0, 128, 0),
            "aqua" | "cyan" => (0, 255, 255),
            "teal" => (0, 128, 128),
            "blue" => (0, 0, 255),
            "navy" => (0, 0, 128),
            "fuchsia" | "magenta" => (255, 0, 255),
            "purple" => (128, 0, 128),
            "transparent" => return Some(Self { a: 255, ..Self::BLACK }),
            _ => return None,
        };
        Some(Self::new(r, g, b))
    }

    /// Parse a `#hex` string or an HTML color name.
    ///
    /// Unrecognized input never fails the caller: the result is opaque
    /// black, and the substitution is reported once per unique input
    /// through the deduplicated warning channel.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::from_hex(input)
            .or_else(|| Self::from_named(input))
            .unwrap_or_else(|| {
                warn_once("CSS", &format!("unrecognized color '{input}', using black"));
                Self::BLACK
            })
    }

    /// Render to CSS text.
    ///
    /// Hex output always uses six uppercase digits; rgba output carries
    /// the integer opacity (0-255) last. A trailing unit, if attached,
    /// follows after a single space.
    #[must_use]
    pub fn render(&self) -> String {
        let color = match self.mode {
            ColorMode::Hex => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            ColorMode::Rgba => format!(
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                self.opacity()
            ),
        };
        match &self.unit {
            Some(unit) => format!("{color} {}", unit.render(Vendor::Standard)),
            None => color,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
