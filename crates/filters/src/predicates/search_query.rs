//! Predicate matching entries whose search blob contains a query string.
//!
//! The blob is precomputed by the application layer (see `catalog::blob`),
//! so a match here is a single case-folded substring check per entry.

use crate::casefold;
use crate::traits::Predicate;
use catalog::keys;
use catalog::value::{self, Entry};

/// Passes entries whose `_search_blob` contains the query,
/// case-insensitively.
///
/// The query is folded once at construction; each entry's blob is folded at
/// match time so both sides use the same folding.
pub struct SearchQueryPredicate {
    folded_query: String,
}

impl SearchQueryPredicate {
    /// Create a new SearchQueryPredicate for a non-empty query.
    pub fn new(query: &str) -> Self {
        Self {
            folded_query: casefold::fold(query),
        }
    }
}

impl Predicate for SearchQueryPredicate {
    fn name(&self) -> &str {
        "SearchQueryPredicate"
    }

    fn matches(&self, entry: &Entry) -> bool {
        value::str_field(entry, keys::SEARCH_BLOB)
            .is_some_and(|blob| casefold::fold(blob).contains(&self.folded_query))
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
    fn test_case_insensitive_containment() {
        let predicate = SearchQueryPredicate::new("ATTACK");
        assert!(predicate.matches(&entry(json!({ "_search_blob": "Attack On Titan" }))));

        let predicate = SearchQueryPredicate::new("titan");
        assert!(predicate.matches(&entry(json!({ "_search_blob": "Attack On Titan" }))));
        assert!(!predicate.matches(&entry(json!({ "_search_blob": "One Piece" }))));
    }

    #[test]
    fn test_missing_or_non_string_blob_fails() {
        let predicate = SearchQueryPredicate::new("x");
        assert!(!predicate.matches(&entry(json!({ "other": 1 }))));
        assert!(!predicate.matches(&entry(json!({ "_search_blob": 42 }))));
        assert!(!predicate.matches(&entry(json!({ "_search_blob": null }))));
    }
}
