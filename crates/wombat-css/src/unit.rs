//! Measurement units and their semantic-keyword specializations.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! A [`Unit`] is an optional integer magnitude plus a unit kind. When the
//! magnitude is absent the unit falls back to a semantic keyword drawn
//! from a per-use-site closed set (a position keyword, a radial extent,
//! a border width class), supplied through [`SemanticKeyword`]. The
//! `initial` and `inherit` kinds always render as the bare keyword, even
//! when a magnitude is present.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};

use crate::keyword::{KeywordSet, PropertyKeyword};
use crate::vendor::Vendor;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by `<length>`
/// in the property definitions."
///
/// The measurement kind of a [`Unit`], including the CSS-wide keywords
/// `initial`, `inherit`, and `auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum UnitKind {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    #[default]
    Px,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the
    /// element on which it is used."
    Em,
    /// "Equal to the used x-height of the first available font."
    Ex,
    /// "Equal to the used advance measure of the '0' glyph."
    Ch,
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw,
    /// "1vh = 1% of viewport height"
    Vh,
    /// "Equal to the smaller of vw or vh"
    Vmin,
    /// "Equal to the larger of vw or vh"
    Vmax,
    /// [§ 5.1.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// Rendered with the `%` suffix.
    Percent,
    /// centimeters
    Cm,
    /// millimeters
    Mm,
    /// inches (1in = 96px = 2.54cm); rendered with the `in` suffix
    In,
    /// points (1pt = 1/72 of 1in)
    Pt,
    /// picas (1pc = 12pt)
    Pc,
    /// Resets the property to its default value. Renders as the bare
    /// keyword and wins over any magnitude.
    Initial,
    /// Inherits the property from the parent element. Renders as the bare
    /// keyword and wins over any magnitude.
    Inherit,
    /// Leaves the value to the user agent.
    Auto,
}

impl UnitKind {
    /// The text placed after a numeric magnitude, or standing alone for
    /// the keyword kinds.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Percent => "%",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Initial => "initial",
            Self::Inherit => "inherit",
            Self::Auto => "auto",
        }
    }
}

/// Fallback keyword hook for unit specializations.
///
/// Implementors are the closed sets a magnitude-less unit falls back to;
/// the set's default member stands in when no keyword was given either.
/// Only [`Direction`] pays attention to the vendor context.
pub trait SemanticKeyword: Copy + Default {
    /// The keyword token under the given vendor context.
    fn fallback_token(self, vendor: Vendor) -> String;
}

/// Marker for plain units with no semantic keyword: the fallback renders
/// as empty text, matching a unit that was never given a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoKeyword;

impl SemanticKeyword for NoKeyword {
    fn fallback_token(self, _vendor: Vendor) -> String {
        String::new()
    }
}

/// Position keywords for gradient endpoints and background placement.
///
/// The discriminants are chosen so that negation is directional
/// inversion: left and right swap, top and bottom swap, center stays.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum Direction {
    /// Center alignment. Its own inverse.
    #[default]
    Center = 0,
    /// Left alignment.
    Left = 1,
    /// Top alignment.
    Top = 2,
    /// Right alignment.
    Right = -1,
    /// Bottom alignment.
    Bottom = -2,
}

impl Direction {
    /// The directional inverse: left and right swap, top and bottom swap,
    /// center maps to itself.
    #[must_use]
    pub fn invert(self) -> Self {
        Self::from_repr(-(self as i32)).unwrap_or(Self::Center)
    }
}

impl KeywordSet for Direction {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl SemanticKeyword for Direction {
    // Legacy -webkit- gradients measure the direction from the opposite
    // side compared to the standard "to <side>" form.
    fn fallback_token(self, vendor: Vendor) -> String {
        match vendor {
            Vendor::Webkit => self.invert().css_token(),
            _ => self.css_token(),
        }
    }
}

/// [§ 3.2.2 radial-gradient](https://www.w3.org/TR/css-images-3/#radial-gradient-syntax)
///
/// Extent keywords sizing a radial gradient's ending shape.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum RadialExtent {
    /// The ending shape meets the side of the box closest to its center.
    ClosestSide,
    /// The ending shape meets the side of the box farthest from its center.
    FarthestSide,
    /// Sized so the ending shape passes through the closest corner.
    #[default]
    ClosestCorner,
    /// Sized so the ending shape passes through the farthest corner.
    FarthestCorner,
}

impl KeywordSet for RadialExtent {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl SemanticKeyword for RadialExtent {
    fn fallback_token(self, _vendor: Vendor) -> String {
        self.css_token()
    }
}

/// [§ 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "Value: `<line-width>` ... thin | medium | thick"
///
/// Width classes a border width can fall back to when no magnitude is
/// given.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BorderWidthKeyword {
    /// A thin border.
    Thin,
    /// A thick border.
    Thick,
    /// Resets the property to its default value.
    #[default]
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BorderWidthKeyword {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BorderWidthKeyword {
    const PROPERTY: &'static str = "border-width";
}

impl SemanticKeyword for BorderWidthKeyword {
    fn fallback_token(self, _vendor: Vendor) -> String {
        self.css_token()
    }
}

/// A measurement value: an optional integer magnitude plus a unit kind,
/// with a semantic-keyword fallback for the magnitude-less form.
///
/// Rendering rules, in order:
/// 1. the `initial`/`inherit` kinds render as the bare keyword;
/// 2. a present magnitude renders as `<magnitude><suffix>`;
/// 3. otherwise the semantic keyword (or its set's default) renders.
///
/// Cloning produces an independent copy; mutating the copy never touches
/// the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Unit<K = NoKeyword> {
    /// The numeric magnitude; absent means the keyword fallback applies.
    pub magnitude: Option<i32>,
    /// The measurement kind providing the rendered suffix.
    pub kind: UnitKind,
    /// The semantic keyword used when no magnitude is set.
    pub keyword: Option<K>,
}

impl<K> Unit<K> {
    /// A magnitude with an explicit kind.
    #[must_use]
    pub const fn new(magnitude: i32, kind: UnitKind) -> Self {
        Self {
            magnitude: Some(magnitude),
            kind,
            keyword: None,
        }
    }

    /// A pixel magnitude (the default kind).
    #[must_use]
    pub const fn px(magnitude: i32) -> Self {
        Self::new(magnitude, UnitKind::Px)
    }

    /// A bare unit keyword such as `initial` or `inherit`.
    #[must_use]
    pub const fn bare(kind: UnitKind) -> Self {
        Self {
            magnitude: None,
            kind,
            keyword: None,
        }
    }

    /// A magnitude-less unit carrying only a semantic keyword.
    #[must_use]
    pub const fn semantic(keyword: K) -> Self {
        Self {
            magnitude: None,
            kind: UnitKind::Px,
            keyword: Some(keyword),
        }
    }
}

impl<K: SemanticKeyword> Unit<K> {
    /// Render under a vendor context.
    #[must_use]
    pub fn render(&self, vendor: Vendor) -> String {
        match self.kind {
            UnitKind::Initial | UnitKind::Inherit => self.kind.suffix().to_string(),
            _ => match self.magnitude {
                Some(magnitude) => format!("{magnitude}{}", self.kind.suffix()),
                None => self.keyword.unwrap_or_default().fallback_token(vendor),
            },
        }
    }
}

impl<K: SemanticKeyword> fmt::Display for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Vendor::Standard))
    }
}

/// Positional unit: falls back to a [`Direction`] keyword (default
/// `center`); the `-webkit-` context renders the inverse direction.
pub type PositionUnit = Unit<Direction>;

/// Radial extent unit: falls back to a [`RadialExtent`] keyword (default
/// `closest-corner`).
pub type ExtentUnit = Unit<RadialExtent>;

/// Border width unit: falls back to a [`BorderWidthKeyword`] (default
/// `initial`).
pub type WidthUnit = Unit<BorderWidthKeyword>;

impl From<Direction> for PositionUnit {
    fn from(direction: Direction) -> Self {
        Self::semantic(direction)
    }
}

impl From<RadialExtent> for ExtentUnit {
    fn from(extent: RadialExtent) -> Self {
        Self::semantic(extent)
    }
}

impl From<BorderWidthKeyword> for WidthUnit {
    fn from(width: BorderWidthKeyword) -> Self {
        Self::semantic(width)
    }
}
