//! Predicate matching entries carrying a selected genre.

use crate::casefold;
use crate::traits::Predicate;
use catalog::keys;
use catalog::value::{self, Entry};
use serde_json::Value;

/// Sentinel genre meaning "no genre restriction".
///
/// The comparison against this literal is case-sensitive: it is a fixed UI
/// sentinel supplied by the application layer, not user text.
pub const ALL_GENRES: &str = "all genres";

/// Passes entries whose `media.genres` contains the selected genre,
/// case-insensitively.
///
/// ## Algorithm
/// 1. Read the nested `media` mapping, then its `genres` sequence
/// 2. Compare each string element against the folded selection
/// 3. Non-string elements are skipped; absent `media`/`genres` fails
pub struct GenrePredicate {
    folded_genre: String,
}

impl GenrePredicate {
    /// Create a new GenrePredicate for a concrete genre selection.
    ///
    /// The caller decides activation: an empty selection or the
    /// [`ALL_GENRES`] sentinel means the predicate should not be built at
    /// all.
    pub fn new(selected_genre: &str) -> Self {
        Self {
            folded_genre: casefold::fold(selected_genre),
        }
    }
}

impl Predicate for GenrePredicate {
    fn name(&self) -> &str {
        "GenrePredicate"
    }

    fn matches(&self, entry: &Entry) -> bool {
        value::object_field(entry, keys::MEDIA)
            .and_then(|media| value::array_field(media, keys::GENRES))
            .is_some_and(|genres| {
                genres
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|genre| casefold::fold(genre) == self.folded_genre)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: serde_json::Value) -> Entry {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_genre_match_is_case_insensitive() {
        let predicate = GenrePredicate::new("action");
        let e = entry(json!({ "media": { "genres": ["Action", "Drama"] } }));
        assert!(predicate.matches(&e));

        let predicate = GenrePredicate::new("ROMANCE");
        assert!(!predicate.matches(&e));
    }

    #[test]
    fn test_non_string_genre_entries_are_skipped() {
        let predicate = GenrePredicate::new("drama");
        let e = entry(json!({ "media": { "genres": [7, null, "Drama"] } }));
        assert!(predicate.matches(&e));

        let only_junk = entry(json!({ "media": { "genres": [7, null] } }));
        assert!(!predicate.matches(&only_junk));
    }

    #[test]
    fn test_missing_media_or_genres_fails() {
        let predicate = GenrePredicate::new("action");
        assert!(!predicate.matches(&entry(json!({ "progress": 1 }))));
        assert!(!predicate.matches(&entry(json!({ "media": {} }))));
        assert!(!predicate.matches(&entry(json!({ "media": { "genres": "Action" } }))));
    }
}
