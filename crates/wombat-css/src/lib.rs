//! Typed CSS value model and vendor-prefixed declaration rendering for
//! the Wombat background builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Keyword codec** — closed keyword sets rendered as CSS tokens and
//!   `property:value;` declaration lines, with non-panicking
//!   `(value, ok)` parsing back into the sets
//! - **Units** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Integer magnitudes over the px/em/%/... kinds
//!   - Semantic-keyword fallbacks (position, radial extent, width class)
//!   - Bare `initial`/`inherit` rendering
//! - **Colors** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Hex and `rgba()` output notations, optional trailing measurement
//!   - Hex/named parsing with the documented opaque-black fallback
//! - **Gradients** ([CSS Image Values Level 3](https://www.w3.org/TR/css-images-3/))
//!   - Angular, linear, and radial variants
//!   - Four vendor-prefixed lines per gradient (`-webkit-`, `-o-`,
//!     `-moz-`, unprefixed), legacy versus standard argument grammar
//! - **Backgrounds and borders** ([CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Size/position pair descriptors with copy-on-construction defaults
//!   - The aggregate [`Background`] declaration builder
//!   - The [`Border`] shorthand
//!
//! # Not covered
//!
//! - Parsing existing CSS back into the model
//! - Validating field combinations; conflicting shorthand and longhand
//!   declarations render as written, and the cascade's
//!   last-declaration-wins rule resolves them in the consumer
//! - Any UI or file output; rendering returns plain strings the caller
//!   wraps with a selector and persists
//!
//! Rendering is synchronous, allocation-only, and never mutates the
//! model. The types are plain mutable value holders with no interior
//! locking; serialize access externally when sharing across threads.

/// The aggregate background declaration builder per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod background;
/// Border declarations per [CSS Backgrounds and Borders Level 3 § 4](https://www.w3.org/TR/css-backgrounds-3/#borders).
pub mod border;
/// CSS color values per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Composite size and position descriptors.
pub mod descriptor;
/// The narrow interface driven by an interactive editing surface.
pub mod editor;
/// Gradient declaration rendering per [CSS Image Values Level 3](https://www.w3.org/TR/css-images-3/).
pub mod gradient;
/// Keyword-to-token mapping and `(value, ok)` parsing.
pub mod keyword;
/// Measurement units and their semantic-keyword fallbacks.
pub mod unit;
/// Vendor rendering contexts for prefixed declarations.
pub mod vendor;

// Re-exports for convenience
pub use background::{
    Background, BackgroundAttachment, BackgroundClip, BackgroundImage, BackgroundOrigin,
    BackgroundRepeat, BkgOption,
};
pub use border::{Border, BorderStyle};
pub use color::{ColorMode, Rgb};
pub use descriptor::{
    BackgroundPosition, BackgroundSize, BackgroundSizeKeyword, Radial, RadialSize, Shape,
};
pub use editor::{
    BackgroundField, EditorError, FieldValue, GradientVariant, PreviewSurface, SAMPLE_IMAGES,
    field_text, refresh_preview, set_field,
};
pub use gradient::{
    AngularGradient, DEFAULT_ANGLE_DEG, Gradient, GradientKind, LinearGradient, RadialGradient,
};
pub use keyword::{
    KeywordSet, PropertyKeyword, css_token, declaration_line, parse_keyword, parse_keyword_index,
};
pub use unit::{
    BorderWidthKeyword, Direction, ExtentUnit, NoKeyword, PositionUnit, RadialExtent,
    SemanticKeyword, Unit, UnitKind, WidthUnit,
};
pub use vendor::Vendor;
