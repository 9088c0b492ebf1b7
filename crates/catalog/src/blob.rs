//! Search-metadata precomputation for catalog entries.
//!
//! The application layer runs this once per entry when a list arrives from
//! the tracker API, so that the filtering core can match against a single
//! precomputed `_search_blob` string and an integer `calendar_day` code
//! instead of walking the nested media payload on every keystroke.

use crate::keys;
use crate::value::{self, Entry};
use serde_json::Value;

const SECONDS_PER_DAY: i64 = 86_400;

// 1970-01-01 was a Thursday; weekday codes use Monday = 0.
const EPOCH_WEEKDAY: i64 = 3;

/// Build the searchable text for one entry.
///
/// Concatenates the media title variants (romaji, english, native) and the
/// genre names, whitespace-joined, in payload order. Missing or non-string
/// pieces are skipped; an entry without a media mapping yields an empty
/// blob.
pub fn build_search_blob(entry: &Entry) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(media) = value::object_field(entry, keys::MEDIA) {
        if let Some(title) = value::object_field(media, keys::TITLE) {
            for variant in keys::TITLE_VARIANTS {
                if let Some(text) = value::str_field(title, variant) {
                    parts.push(text);
                }
            }
        }

        if let Some(genres) = value::array_field(media, keys::GENRES) {
            parts.extend(genres.iter().filter_map(Value::as_str));
        }
    }

    parts.join(" ")
}

/// Day-of-week code (Monday = 0) for a Unix timestamp, in UTC.
///
/// Total over the whole `i64` range, including pre-epoch timestamps.
pub fn weekday_from_epoch(secs: i64) -> i64 {
    (secs.div_euclid(SECONDS_PER_DAY) + EPOCH_WEEKDAY).rem_euclid(7)
}

/// Attach `_search_blob` and `calendar_day` to an entry in place.
///
/// Only entries that are mappings with a nested `media` mapping are
/// touched; anything else is left exactly as it was. `calendar_day` is
/// written only when `media.nextAiringEpisode.airingAt` carries an integer
/// timestamp.
pub fn attach_search_metadata(entry: &mut Value) {
    let (search_blob, calendar_day) = match value::as_entry(entry) {
        Some(map) if value::object_field(map, keys::MEDIA).is_some() => {
            let airing_day = value::object_field(map, keys::MEDIA)
                .and_then(|media| value::object_field(media, keys::NEXT_AIRING_EPISODE))
                .and_then(|next| value::int_field(next, keys::AIRING_AT))
                .map(weekday_from_epoch);
            (build_search_blob(map), airing_day)
        }
        _ => return,
    };

    if let Some(map) = entry.as_object_mut() {
        map.insert(keys::SEARCH_BLOB.to_string(), Value::String(search_blob));
        if let Some(day) = calendar_day {
            map.insert(keys::CALENDAR_DAY.to_string(), Value::from(day));
        }
    }
}
