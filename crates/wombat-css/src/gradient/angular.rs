//! Angle-directed linear gradients.
//!
//! [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)

use serde::Serialize;

use super::{GradientKind, declaration_line, render_block};
use crate::color::Rgb;

/// [§ 3.1.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
///
/// "0deg points upward, and positive angles represent clockwise
/// rotation, so 90deg point toward the right."
///
/// The direction used when no angle is set.
pub const DEFAULT_ANGLE_DEG: i32 = 90;

/// A linear gradient directed by an explicit angle.
///
/// Renders with the `linear-gradient` function family. The angle clause
/// is identical in all four vendor contexts; only the prefix differs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AngularGradient {
    /// Ordered color stops.
    pub stops: Vec<Rgb>,
    /// Emit the `repeating-` function family.
    pub repeat: bool,
    /// Declare on `background-image` instead of `background`.
    pub as_image: bool,
    /// Raster fallback image placed ahead of the gradient.
    pub image_url: Option<String>,
    /// Direction in degrees; defaults to [`DEFAULT_ANGLE_DEG`].
    pub angle: Option<i32>,
}

impl AngularGradient {
    /// A gradient over the given stops with an explicit angle.
    #[must_use]
    pub fn new(angle: i32, stops: Vec<Rgb>) -> Self {
        Self {
            angle: Some(angle),
            stops,
            ..Self::default()
        }
    }

    /// Render the four-line declaration block.
    #[must_use]
    pub fn render(&self) -> String {
        let clause = format!("{}deg,", self.angle.unwrap_or(DEFAULT_ANGLE_DEG));
        render_block(|vendor| {
            declaration_line(
                GradientKind::LinearGradient,
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
