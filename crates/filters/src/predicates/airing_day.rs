//! Predicate matching entries that air on a given day of the week.
//!
//! This backs the "only today" toggle: the application passes the current
//! weekday code and only entries airing that day pass.

use crate::traits::Predicate;
use catalog::keys;
use catalog::value::{self, Entry};

/// Passes entries whose `calendar_day` equals the given weekday code.
///
/// ## Algorithm
/// Read `calendar_day` as a strict integer and compare for equality.
/// An absent or non-integer value (a float, a string like `"2"`) fails.
pub struct AiringDayPredicate {
    today_weekday: i64,
}

impl AiringDayPredicate {
    /// Create a new AiringDayPredicate.
    ///
    /// # Arguments
    /// * `today_weekday` - Current day-of-week code (Monday = 0)
    pub fn new(today_weekday: i64) -> Self {
        Self { today_weekday }
    }
}

impl Predicate for AiringDayPredicate {
    fn name(&self) -> &str {
        "AiringDayPredicate"
    }

    fn matches(&self, entry: &Entry) -> bool {
        value::int_field(entry, keys::CALENDAR_DAY) == Some(self.today_weekday)
    }
}
