//! Gradient declaration rendering.
//!
//! [CSS Image Values Level 3 § 3](https://www.w3.org/TR/css-images-3/#gradients)
//!
//! Every gradient renders as four declaration lines, one per vendor
//! context in the fixed order `-webkit-`, `-o-`, `-moz-`, unprefixed,
//! joined by newlines. Each line follows the shared template
//!
//! ```text
//! <property>:[url('<image-url>'),]<prefix>[repeating-]<kind>(<clause><stops>);
//! ```
//!
//! where `<property>` is `background` or `background-image`, `<clause>`
//! is the variant's per-context direction or shape arguments, and
//! `<stops>` is the comma-joined color stop list.

mod angular;
mod linear;
mod radial;

pub use angular::{AngularGradient, DEFAULT_ANGLE_DEG};
pub use linear::LinearGradient;
pub use radial::RadialGradient;

use serde::Serialize;
use strum_macros::{Display, EnumString, FromRepr};

use crate::color::Rgb;
use crate::keyword::KeywordSet;
use crate::vendor::Vendor;

/// The CSS function family a gradient renders with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(i32)]
pub enum GradientKind {
    /// `linear-gradient(...)`, shared by the angular and endpoint forms.
    #[default]
    LinearGradient,
    /// `radial-gradient(...)`.
    RadialGradient,
}

impl KeywordSet for GradientKind {
    fn from_index(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}

/// Any of the three gradient variants.
///
/// Switching variants means constructing the new variant; the shared base
/// fields (stops, repeat flag, image fallback) are not migrated
/// automatically. Copy them explicitly when the editing surface wants
/// them preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Gradient {
    /// An angle-directed linear gradient.
    Angular(AngularGradient),
    /// An endpoint-directed linear gradient.
    Linear(LinearGradient),
    /// A radial gradient.
    Radial(RadialGradient),
}

impl Gradient {
    /// The rendered function family of the active variant.
    #[must_use]
    pub const fn kind(&self) -> GradientKind {
        match self {
            Self::Angular(_) | Self::Linear(_) => GradientKind::LinearGradient,
            Self::Radial(_) => GradientKind::RadialGradient,
        }
    }

    /// Render the four-line declaration block of the active variant.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Angular(gradient) => gradient.render(),
            Self::Linear(gradient) => gradient.render(),
            Self::Radial(gradient) => gradient.render(),
        }
    }

    /// The ordered color stops of the active variant.
    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        match self {
            Self::Angular(gradient) => &gradient.stops,
            Self::Linear(gradient) => &gradient.stops,
            Self::Radial(gradient) => &gradient.stops,
        }
    }

    /// Set the fallback image URL of the active variant.
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        match self {
            Self::Angular(gradient) => gradient.image_url = image_url,
            Self::Linear(gradient) => gradient.image_url = image_url,
            Self::Radial(gradient) => gradient.image_url = image_url,
        }
    }

    /// Set the repeating flag of the active variant.
    pub fn set_repeat(&mut self, repeat: bool) {
        match self {
            Self::Angular(gradient) => gradient.repeat = repeat,
            Self::Linear(gradient) => gradient.repeat = repeat,
            Self::Radial(gradient) => gradient.repeat = repeat,
        }
    }
}

/// Render one declaration line of the shared gradient template.
fn declaration_line(
    kind: GradientKind,
    repeat: bool,
    as_image: bool,
    image_url: Option<&str>,
    stops: &[Rgb],
    vendor: Vendor,
    clause: &str,
) -> String {
    let property = if as_image { "background-image" } else { "background" };
    let url = image_url.map_or_else(String::new, |url| format!("url('{url}'),"));
    let repeating = if repeat { "repeating-" } else { "" };
    let stops = stops.iter().map(Rgb::render).collect::<Vec<_>>().join(",");
    format!(
        "{property}:{url}{prefix}{repeating}{function}({clause}{stops});",
        prefix = vendor.prefix(),
        function = kind.css_token(),
    )
}

/// Join one line per vendor context, in emission order.
fn render_block(mut line: impl FnMut(Vendor) -> String) -> String {
    Vendor::ALL
        .iter()
        .map(|&vendor| line(vendor))
        .collect::<Vec<_>>()
        .join("\n")
}
