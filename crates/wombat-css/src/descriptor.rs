//! Composite size and position descriptors.
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//! [CSS Image Values Level 3 § 3.2](https://www.w3.org/TR/css-images-3/#radial-gradients)
//!
//! Each descriptor is either a single named keyword or a pair of typed
//! values. When only the first pair slot is supplied, the second becomes
//! an independent copy of it at construction time; mutating either slot
//! afterwards never affects the other.
//!
//! [`Radial`] and [`RadialSize`] are gradient sub-arguments and render
//! bare; [`BackgroundSize`] and [`BackgroundPosition`] stand as top-level
//! declarations and render their own property prefix.

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};

use crate::keyword::{self, KeywordSet, PropertyKeyword};
use crate::unit::{Direction, ExtentUnit, PositionUnit, RadialExtent, Unit};
use crate::vendor::Vendor;

/// [§ 3.2.2 radial-gradient](https://www.w3.org/TR/css-images-3/#radial-gradient-syntax)
///
/// "`<ending-shape>` ... can be either circle or ellipse."
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum Shape {
    /// A circular ending shape.
    #[default]
    Circle,
    /// An elliptical ending shape.
    Ellipse,
}

impl KeywordSet for Shape {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// [§ 3.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
///
/// Keyword values of the `background-size` property.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum BackgroundSizeKeyword {
    /// The image keeps its intrinsic size.
    #[default]
    Auto,
    /// "Scale the image ... to the smallest size such that both its width
    /// and its height can completely cover the background positioning area."
    Cover,
    /// "Scale the image ... to the largest size such that both its width
    /// and its height can fit inside the background positioning area."
    Contain,
    /// Resets the property to its default value.
    Initial,
    /// Inherits the property from the parent element.
    Inherit,
}

impl KeywordSet for BackgroundSizeKeyword {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

impl PropertyKeyword for BackgroundSizeKeyword {
    const PROPERTY: &'static str = "background-size";
}

/// The size of a radial gradient's ending shape: an extent keyword or an
/// explicit radius pair. Renders as a gradient sub-argument with no
/// property prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RadialSize {
    /// One of the four extent keywords.
    Keyword(RadialExtent),
    /// Explicit horizontal and vertical radii.
    Pair(ExtentUnit, ExtentUnit),
}

impl RadialSize {
    /// A radius pair; a missing second radius becomes an independent copy
    /// of the first.
    #[must_use]
    pub fn pair(first: ExtentUnit, second: Option<ExtentUnit>) -> Self {
        let second = second.unwrap_or_else(|| first.clone());
        Self::Pair(first, second)
    }

    /// Render as a gradient sub-argument.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Keyword(extent) => extent.css_token(),
            Self::Pair(first, second) => format!(
                "{} {}",
                first.render(Vendor::Standard),
                second.render(Vendor::Standard)
            ),
        }
    }
}

impl Default for RadialSize {
    fn default() -> Self {
        Self::Keyword(RadialExtent::default())
    }
}

impl From<RadialExtent> for RadialSize {
    fn from(extent: RadialExtent) -> Self {
        Self::Keyword(extent)
    }
}

/// [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)
///
/// The shape, size, and position arguments of a radial gradient.
///
/// The legacy contexts put the position pair first
/// (`<pos1> <pos2>,<shape> <size>`); the standard context infixes `at`
/// (`<shape> <size> at <pos1> <pos2>`). The two grammars are genuinely
/// different and must not be unified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Radial {
    /// The ending shape.
    pub shape: Shape,
    /// The ending-shape size; contributes nothing when absent.
    pub size: Option<RadialSize>,
    /// The first position; `center` when absent.
    pub position1: Option<PositionUnit>,
    /// The second position; copies the first's rendering when absent.
    pub position2: Option<PositionUnit>,
}

impl Radial {
    /// Build a descriptor; a missing second position becomes an
    /// independent copy of the first at construction time.
    #[must_use]
    pub fn new(
        shape: Option<Shape>,
        size: Option<RadialSize>,
        position1: Option<PositionUnit>,
        position2: Option<PositionUnit>,
    ) -> Self {
        let position2 = position2.or_else(|| position1.clone());
        Self {
            shape: shape.unwrap_or_default(),
            size,
            position1,
            position2,
        }
    }

    /// Render as a gradient sub-argument under the given context.
    ///
    /// Positions always render in the standard context here: the legacy
    /// radial grammar rearranges them, it does not invert them.
    #[must_use]
    pub fn render(&self, vendor: Vendor) -> String {
        let shape_size = match &self.size {
            Some(size) => format!("{} {}", self.shape.css_token(), size.render()),
            None => self.shape.css_token(),
        };
        let position1 = self
            .position1
            .as_ref()
            .map_or_else(|| Direction::Center.css_token(), |p| p.render(Vendor::Standard));
        let position2 = self
            .position2
            .as_ref()
            .map_or_else(|| position1.clone(), |p| p.render(Vendor::Standard));
        if vendor.is_legacy() {
            format!("{position1} {position2},{shape_size}")
        } else {
            format!("{shape_size} at {position1} {position2}")
        }
    }
}

/// [§ 3.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
///
/// The `background-size` declaration: a keyword or an explicit pair.
/// Unlike [`RadialSize`] this stands as an independent top-level
/// declaration and renders its own property prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BackgroundSize {
    /// A keyword value (`auto`, `cover`, `contain`, ...).
    Keyword(BackgroundSizeKeyword),
    /// Explicit width and height.
    Pair(Unit, Unit),
}

impl BackgroundSize {
    /// A size pair; a missing second value becomes an independent copy of
    /// the first.
    #[must_use]
    pub fn pair(first: Unit, second: Option<Unit>) -> Self {
        let second = second.unwrap_or_else(|| first.clone());
        Self::Pair(first, second)
    }

    /// Render the full `background-size:...;` declaration line.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Keyword(size) => size.declaration(),
            Self::Pair(first, second) => keyword::declaration_line(
                BackgroundSizeKeyword::PROPERTY,
                &format!(
                    "{} {}",
                    first.render(Vendor::Standard),
                    second.render(Vendor::Standard)
                ),
            ),
        }
    }
}

impl From<BackgroundSizeKeyword> for BackgroundSize {
    fn from(size: BackgroundSizeKeyword) -> Self {
        Self::Keyword(size)
    }
}

/// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
///
/// The `background-position` declaration: a pair of positional units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackgroundPosition {
    /// The horizontal position.
    pub position1: PositionUnit,
    /// The vertical position.
    pub position2: PositionUnit,
}

impl BackgroundPosition {
    /// A position pair; a missing second value becomes an independent
    /// copy of the first.
    #[must_use]
    pub fn pair(first: PositionUnit, second: Option<PositionUnit>) -> Self {
        let position2 = second.unwrap_or_else(|| first.clone());
        Self {
            position1: first,
            position2,
        }
    }

    /// Both slots set to the same named keyword.
    #[must_use]
    pub fn keyword(direction: Direction) -> Self {
        Self::pair(PositionUnit::from(direction), None)
    }

    /// Render the full `background-position:...;` declaration line.
    #[must_use]
    pub fn render(&self) -> String {
        keyword::declaration_line(
            "background-position",
            &format!(
                "{} {}",
                self.position1.render(Vendor::Standard),
                self.position2.render(Vendor::Standard)
            ),
        )
    }
}
