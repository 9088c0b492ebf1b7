//! # Catalog Crate
//!
//! This crate holds the dynamic record model for the airing catalog.
//!
//! Catalog entries arrive from the tracker API layer as schemaless JSON
//! (`serde_json::Value`): every entry is a key-value mapping whose fields
//! may be absent or hold an unexpected type. This crate never errors on a
//! malformed entry; accessors return `Option` and callers decide what a
//! missing field means.
//!
//! ## Main Components
//!
//! - **keys**: well-known field names on catalog entries
//! - **value**: safe typed accessors over dynamic JSON entries
//! - **blob**: search-metadata precomputation (`_search_blob`, `calendar_day`)
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::blob::attach_search_metadata;
//! use serde_json::json;
//!
//! let mut entry = json!({
//!     "media": {
//!         "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan" },
//!         "genres": ["Action", "Drama"],
//!         "nextAiringEpisode": { "airingAt": 1_700_000_000 }
//!     },
//!     "progress": 4
//! });
//!
//! // Derive the searchable blob and the airing weekday code.
//! attach_search_metadata(&mut entry);
//! ```

// Public modules
pub mod blob;
pub mod keys;
pub mod value;

// Re-export commonly used items for convenience
pub use blob::{attach_search_metadata, build_search_blob, weekday_from_epoch};
pub use value::Entry;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_then_read_back() {
        let mut entry = json!({
            "media": {
                "title": { "romaji": "One Piece" },
                "genres": ["Adventure"]
            }
        });

        attach_search_metadata(&mut entry);

        let map = entry.as_object().unwrap();
        let blob = value::str_field(map, keys::SEARCH_BLOB).unwrap();
        assert!(blob.contains("One Piece"));
        assert!(blob.contains("Adventure"));
    }

    #[test]
    fn test_non_object_entry_left_untouched() {
        let mut entry = json!("not a mapping");
        attach_search_metadata(&mut entry);
        assert_eq!(entry, json!("not a mapping"));
    }
}
