//! Vendor rendering contexts for prefixed declarations.
//!
//! [CSS Image Values Level 3](https://www.w3.org/TR/css-images-3/)
//!
//! Gradient support shipped behind vendor prefixes before the standard
//! grammar stabilized, and the prefixed forms keep the legacy argument
//! grammar. Every gradient therefore renders once per context, in a fixed
//! order, so an engine picks up the last form it understands.

use serde::Serialize;

/// A vendor rendering context for one emitted declaration line.
///
/// The legacy contexts (`-webkit-`, `-o-`, `-moz-`) take the pre-standard
/// argument grammar; [`Vendor::Standard`] takes the grammar of
/// [CSS Image Values Level 3 § 3](https://www.w3.org/TR/css-images-3/#gradients).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vendor {
    /// `-webkit-` prefixed output. Legacy grammar; positional keywords
    /// render as their directional inverse in this context.
    Webkit,
    /// `-o-` prefixed output (legacy grammar).
    O,
    /// `-moz-` prefixed output (legacy grammar).
    Moz,
    /// Unprefixed output (standard grammar).
    Standard,
}

impl Vendor {
    /// Emission order for gradient declaration blocks: prefixed forms
    /// first, the standard form last so it wins where supported.
    pub const ALL: [Self; 4] = [Self::Webkit, Self::O, Self::Moz, Self::Standard];

    /// The property-name prefix of this context (empty for standard).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Webkit => "-webkit-",
            Self::O => "-o-",
            Self::Moz => "-moz-",
            Self::Standard => "",
        }
    }

    /// Whether this context uses the legacy (pre-standard) gradient grammar.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        !matches!(self, Self::Standard)
    }
}
