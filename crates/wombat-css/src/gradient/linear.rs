//! Endpoint-directed linear gradients.
//!
//! [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)

use serde::Serialize;

use super::{GradientKind, declaration_line, render_block};
use crate::color::Rgb;
use crate::unit::{Direction, PositionUnit};
use crate::vendor::Vendor;

/// A linear gradient directed by one or two positional endpoints.
///
/// [§ 3.1.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
///
/// "to `<side-or-corner>`: ... the keyword to followed by one or two
/// keywords: one indicating the horizontal side, the other the vertical."
///
/// The standard context prefixes the endpoint clause with `to `; the
/// legacy contexts omit it, and the `-webkit-` context renders the
/// directional inverse of each keyword endpoint. With no endpoints set,
/// no direction clause is emitted and the stops open the argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinearGradient {
    /// Ordered color stops.
    pub stops: Vec<Rgb>,
    /// Emit the `repeating-` function family.
    pub repeat: bool,
    /// Declare on `background-image` instead of `background`.
    pub as_image: bool,
    /// Raster fallback image placed ahead of the gradient.
    pub image_url: Option<String>,
    /// The first endpoint.
    pub position1: Option<PositionUnit>,
    /// The second endpoint (corner form when combined with the first).
    pub position2: Option<PositionUnit>,
}

impl LinearGradient {
    /// A gradient over the given stops toward the given side.
    #[must_use]
    pub fn toward(position: Direction, stops: Vec<Rgb>) -> Self {
        Self {
            position1: Some(PositionUnit::from(position)),
            stops,
            ..Self::default()
        }
    }

    fn clause(&self, vendor: Vendor) -> String {
        let parts: Vec<String> = [self.position1.as_ref(), self.position2.as_ref()]
            .into_iter()
            .flatten()
            .map(|position| position.render(vendor))
            .collect();
        if parts.is_empty() {
            return String::new();
        }
        let head = if vendor.is_legacy() { "" } else { "to " };
        format!("{head}{},", parts.join(" "))
    }

    /// Render the four-line declaration block.
    #[must_use]
    pub fn render(&self) -> String {
        render_block(|vendor| {
            declaration_line(
                GradientKind::LinearGradient,
                self.repeat,
                self.as_image,
                self.image_url.as_deref(),
                &self.stops,
                vendor,
                &self.clause(vendor),
            )
        })
    }
}
