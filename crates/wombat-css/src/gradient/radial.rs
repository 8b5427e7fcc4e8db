//! Radial gradients.
//!
//! [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)

use serde::Serialize;

use super::{GradientKind, declaration_line, render_block};
use crate::color::Rgb;
use crate::descriptor::Radial;

/// A radial gradient described by shape, size, and position.
///
/// The legacy contexts and the standard context use genuinely different
/// argument grammars: position pair first versus `at`-infixed. See
/// [`Radial::render`] for the split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RadialGradient {
    /// Ordered color stops.
    pub stops: Vec<Rgb>,
    /// Emit the `repeating-` function family.
    pub repeat: bool,
    /// Declare on `background-image` instead of `background`.
    pub as_image: bool,
    /// Raster fallback image placed ahead of the gradient.
    pub image_url: Option<String>,
    /// Shape, size, and position arguments.
    pub radial: Radial,
}

impl RadialGradient {
    /// A gradient over the given stops with the given descriptor.
    #[must_use]
    pub fn new(radial: Radial, stops: Vec<Rgb>) -> Self {
        Self {
            radial,
            stops,
            ..Self::default()
        }
    }

    /// Render the four-line declaration block.
    #[must_use]
    pub fn render(&self) -> String {
        render_block(|vendor| {
            let clause = format!("{},", self.radial.render(vendor));
            declaration_line(
                GradientKind::RadialGradient,
                self.repeat,
                self.as_image,
                self.image_url.as_deref(),
                &self.stops,
                vendor,
                &clause,
            )
        })
    }
}
