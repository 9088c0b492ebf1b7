//! Public entry points for catalog filtering.
//!
//! Both operations take their sequence and string parameters as dynamic
//! JSON values, mirroring the duck-typed boundary they are called across:
//! a wrong top-level type is a [`FilterError`] raised before any entry is
//! inspected, while a malformed field inside one entry only excludes that
//! entry.

use crate::chain::PredicateChain;
use crate::error::{FilterError, Result};
use crate::predicates::{
    ALL_GENRES, AiringDayPredicate, GenrePredicate, MinScorePredicate, SearchQueryPredicate,
};
use crate::traits::Predicate;
use catalog::value;
use serde_json::Value;

fn require_array<'a>(argument: &'a Value, param: &'static str) -> Result<&'a [Value]> {
    argument
        .as_array()
        .map(Vec::as_slice)
        .ok_or(FilterError::ExpectedArray {
            param,
            found: value::type_name(argument),
        })
}

fn require_str<'a>(argument: &'a Value, param: &'static str) -> Result<&'a str> {
    argument.as_str().ok_or(FilterError::ExpectedString {
        param,
        found: value::type_name(argument),
    })
}

/// Indices of entries whose search blob contains `query`,
/// case-insensitively.
///
/// The result is strictly increasing. Entries that are not mappings, lack
/// `_search_blob`, or hold a non-string blob are silently excluded.
///
/// An empty query is a documented fast path: every position is returned
/// without inspecting a single entry, malformed ones included.
///
/// # Errors
/// [`FilterError`] if `entries` is not an array or `query` is not a string.
pub fn filter_contains_indices(entries: &Value, query: &Value) -> Result<Vec<usize>> {
    let entries = require_array(entries, "entries")?;
    let query = require_str(query, "query")?;

    if query.is_empty() {
        return Ok((0..entries.len()).collect());
    }

    let predicate = SearchQueryPredicate::new(query);
    let indices: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            value::as_entry(candidate).is_some_and(|entry| predicate.matches(entry))
        })
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(
        "Substring filter matched {} of {} entries",
        indices.len(),
        entries.len()
    );
    Ok(indices)
}

/// Indices of entries passing the conjunction of four independently
/// toggleable predicates: airing day, substring query, genre, and minimum
/// score.
///
/// Predicates are evaluated in that order with short-circuiting; an
/// inactive predicate passes without inspecting the entry. Activation:
/// - day: `only_today` is true
/// - query: `query` is non-empty
/// - genre: `selected_genre` is non-empty and not the `"all genres"`
///   sentinel (compared case-sensitively)
/// - score: `min_score > 0`
///
/// Entries that are not mappings fail unconditionally. The result is
/// strictly increasing.
///
/// # Errors
/// [`FilterError`] if `entries` is not an array or `query`/`selected_genre`
/// is not a string.
pub fn filter_advanced_indices(
    entries: &Value,
    query: &Value,
    selected_genre: &Value,
    min_score: i64,
    only_today: bool,
    today_weekday: i64,
) -> Result<Vec<usize>> {
    let entries = require_array(entries, "entries")?;
    let query = require_str(query, "query")?;
    let selected_genre = require_str(selected_genre, "selected_genre")?;

    let mut chain = PredicateChain::new();
    if only_today {
        chain = chain.add(AiringDayPredicate::new(today_weekday));
    }
    if !query.is_empty() {
        chain = chain.add(SearchQueryPredicate::new(query));
    }
    if !selected_genre.is_empty() && selected_genre != ALL_GENRES {
        chain = chain.add(GenrePredicate::new(selected_genre));
    }
    if min_score > 0 {
        chain = chain.add(MinScorePredicate::new(min_score));
    }

    let indices: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            value::as_entry(candidate).is_some_and(|entry| chain.matches(entry))
        })
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(
        "Advanced filter ({} active predicates) matched {} of {} entries",
        chain.len(),
        indices.len(),
        entries.len()
    );
    Ok(indices)
}

/// The entries matching `query`, in order, instead of their indices.
///
/// Convenience wrapper over [`filter_contains_indices`] for callers that
/// want the entries themselves; an empty query returns every entry.
pub fn filter_entries<'a>(entries: &'a Value, query: &Value) -> Result<Vec<&'a Value>> {
    let items = require_array(entries, "entries")?;
    let indices = filter_contains_indices(entries, query)?;
    Ok(indices.into_iter().map(|index| &items[index]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_returns_every_position() {
        let entries = json!([
            { "_search_blob": "one piece" },
            "not a mapping",
            { "other": 1 }
        ]);

        let indices = filter_contains_indices(&entries, &json!("")).unwrap();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_indices_are_strictly_increasing() {
        let entries = json!([
            { "_search_blob": "jujutsu kaisen" },
            { "_search_blob": "oshi no ko" },
            { "_search_blob": "jujutsu kaisen 2" }
        ]);

        let indices = filter_contains_indices(&entries, &json!("ju")).unwrap();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_entries_must_be_an_array() {
        let err = filter_contains_indices(&json!("not a list"), &json!("x")).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ExpectedArray { param: "entries", found: "string" }
        ));
    }

    #[test]
    fn test_query_must_be_a_string() {
        let err = filter_contains_indices(&json!([]), &json!(5)).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ExpectedString { param: "query", found: "number" }
        ));

        let err =
            filter_advanced_indices(&json!([]), &json!(5), &json!("g"), 0, false, 1).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ExpectedString { param: "query", .. }
        ));
    }

    #[test]
    fn test_selected_genre_must_be_a_string() {
        let err =
            filter_advanced_indices(&json!([]), &json!(""), &json!(null), 0, false, 0).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ExpectedString { param: "selected_genre", found: "null" }
        ));
    }

    #[test]
    fn test_inactive_filters_keep_only_mappings() {
        let entries = json!([
            { "_search_blob": "x" },
            17,
            { "media": { "genres": [] } },
            null
        ]);

        let indices =
            filter_advanced_indices(&entries, &json!(""), &json!(""), 0, false, 0).unwrap();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_filter_entries_maps_indices_back() {
        let entries = json!([
            { "_search_blob": "one piece" },
            { "_search_blob": "oshi no ko" },
            { "_search_blob": "jujutsu kaisen" }
        ]);

        let matched = filter_entries(&entries, &json!("ko")).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0], &json!({ "_search_blob": "oshi no ko" }));

        let all = filter_entries(&entries, &json!("")).unwrap();
        assert_eq!(all.len(), 3);
    }
}
