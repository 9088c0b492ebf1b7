//! Predicate enforcing a minimum average score.

use crate::traits::Predicate;
use catalog::keys;
use catalog::value::{self, Entry};

/// Passes entries whose `media.averageScore` is at least the threshold.
///
/// ## Algorithm
/// Read `media.averageScore` as a number (integer or float both accepted)
/// and compare with `>=`. A null, absent, or non-numeric score fails.
pub struct MinScorePredicate {
    min_score: i64,
}

impl MinScorePredicate {
    /// Create a new MinScorePredicate.
    ///
    /// # Arguments
    /// * `min_score` - Minimum average score, inclusive (typically 0-100)
    pub fn new(min_score: i64) -> Self {
        Self { min_score }
    }
}

impl Predicate for MinScorePredicate {
    fn name(&self) -> &str {
        "MinScorePredicate"
    }

    fn matches(&self, entry: &Entry) -> bool {
        value::object_field(entry, keys::MEDIA)
            .and_then(|media| value::number_field(media, keys::AVERAGE_SCORE))
            .is_some_and(|score| score >= self.min_score as f64)
    }
}
