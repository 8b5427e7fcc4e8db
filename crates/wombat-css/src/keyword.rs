//! Keyword-to-CSS-token mapping and declaration assembly.
//!
//! [CSS Values and Units Level 4 § 2.1](https://www.w3.org/TR/css-values-4/#keywords)
//!
//! "Keywords ... appear literally, as the keyword itself."
//!
//! Closed keyword sets are plain enums whose CSS tokens come from the
//! kebab-case spelling of the variant name. The identifier-to-token
//! substitution (`_` becomes `-`) is implemented once here and through
//! the strum `Display` derive on the sets themselves, never per type.
//! Parsing back into a set never panics and never substitutes a default
//! silently: every parse helper returns a `(value, ok)` pair and the
//! caller chooses its fallback policy.

use std::fmt::Display;
use std::str::FromStr;

/// Replace `_` with `-` to turn an identifier-style name into a CSS token.
///
/// Total and pure; the result is not validated against any CSS grammar.
#[must_use]
pub fn css_token(name: &str) -> String {
    name.replace('_', "-")
}

/// Assemble a `property:value;` declaration line.
#[must_use]
pub fn declaration_line(property: &str, value: &str) -> String {
    format!("{property}:{value};")
}

/// A closed keyword set with a stable integer encoding.
///
/// `Display` renders the CSS token (kebab-case); `FromStr` parses it back
/// case-insensitively; the default member stands in when a parse fails
/// and the caller accepts the `ok = false` flag.
pub trait KeywordSet: Copy + Default + Display + FromStr {
    /// Map a raw integer encoding back into the set, if it names a member.
    fn from_index(index: i32) -> Option<Self>;

    /// The CSS token of this keyword.
    #[must_use]
    fn css_token(self) -> String {
        self.to_string()
    }
}

/// A keyword set that stands as the whole value of one CSS property.
pub trait PropertyKeyword: KeywordSet {
    /// The property name the set belongs to: the kebab-case of the set's
    /// declared name, fixed once here.
    const PROPERTY: &'static str;

    /// Render the full `property:keyword;` declaration line.
    #[must_use]
    fn declaration(self) -> String {
        declaration_line(Self::PROPERTY, &self.css_token())
    }
}

/// Parse free text into a keyword set member.
///
/// Returns `(member, true)` on success and `(default, false)` when the
/// input names nothing in the set. Never panics.
#[must_use]
pub fn parse_keyword<K: KeywordSet>(text: &str) -> (K, bool) {
    text.trim()
        .parse::<K>()
        .map_or_else(|_| (K::default(), false), |keyword| (keyword, true))
}

/// Parse an integer encoding into a keyword set member.
///
/// Same contract as [`parse_keyword`]: `(default, false)` when the value
/// encodes nothing in the set.
#[must_use]
pub fn parse_keyword_index<K: KeywordSet>(index: i32) -> (K, bool) {
    K::from_index(index).map_or_else(|| (K::default(), false), |keyword| (keyword, true))
}
