//! # Filters Crate
//!
//! Fast in-memory filtering for the airing catalog.
//!
//! This crate is the search helper the application calls on every
//! keystroke and toggle change: given the current entry list and the
//! active filter controls, it returns the indices of the entries to show.
//! It never mutates, sorts, or ranks the list.
//!
//! ## Architecture
//! Filtering is composed from per-entry predicates:
//! 1. Each filter control maps to one [`Predicate`] (day, query, genre,
//!    score)
//! 2. Active predicates are chained into a [`PredicateChain`], a
//!    short-circuiting AND evaluated per entry
//! 3. The entry points validate their top-level arguments, walk the entry
//!    sequence once, and collect passing indices in order
//!
//! Faults are handled at two levels: a wrong top-level argument type is a
//! [`FilterError`] aborting the call, while a malformed field inside one
//! entry only makes that entry a non-match.
//!
//! ## Example Usage
//! ```ignore
//! use filters::filter_advanced_indices;
//! use serde_json::json;
//!
//! // Tuesday, showing only today's airing Action shows scoring 70+.
//! let indices = filter_advanced_indices(
//!     &entries,
//!     &json!("titan"),
//!     &json!("Action"),
//!     70,
//!     true,
//!     1,
//! )?;
//! ```

pub mod casefold;
pub mod chain;
pub mod error;
pub mod predicates;
pub mod search;
pub mod traits;

// Re-export main types
pub use chain::PredicateChain;
pub use error::{FilterError, Result};
pub use search::{filter_advanced_indices, filter_contains_indices, filter_entries};
pub use traits::Predicate;
