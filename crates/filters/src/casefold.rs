//! Case folding for case-insensitive matching.
//!
//! Folding is Unicode-aware and locale-independent: every comparison in
//! this crate folds both sides with the same function, so results do not
//! depend on which side was precomputed. Simple lowercase folding, not full
//! case folding (ß does not become ss).

/// Fold a string for case-insensitive comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}
