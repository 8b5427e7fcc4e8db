//! Shared utilities for the Wombat CSS builder.

/// Deduplicated diagnostic output for fallback behavior.
pub mod warning;
