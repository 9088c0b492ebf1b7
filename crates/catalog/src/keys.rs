//! Well-known field names on catalog entries.
//!
//! Only these keys are interpreted by the filtering core; everything else
//! on an entry is opaque payload owned by the application layer.

/// Precomputed searchable text for an entry.
pub const SEARCH_BLOB: &str = "_search_blob";

/// Day-of-week code for the next airing episode (Monday = 0).
pub const CALENDAR_DAY: &str = "calendar_day";

/// Nested media mapping from the tracker API.
pub const MEDIA: &str = "media";

/// Genre name list under `media`.
pub const GENRES: &str = "genres";

/// Average community score under `media`.
pub const AVERAGE_SCORE: &str = "averageScore";

/// Title variants mapping under `media`.
pub const TITLE: &str = "title";

/// Next-airing-episode mapping under `media`.
pub const NEXT_AIRING_EPISODE: &str = "nextAiringEpisode";

/// Unix timestamp of the next airing, under `media.nextAiringEpisode`.
pub const AIRING_AT: &str = "airingAt";

/// Title variants carried by the tracker payload, in display priority order.
pub const TITLE_VARIANTS: [&str; 3] = ["romaji", "english", "native"];
