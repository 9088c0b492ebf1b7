//! Error types for the filters crate.

use thiserror::Error;

/// Errors raised for top-level argument type violations.
///
/// These abort the whole call before any entry is inspected. Malformed
/// fields inside an individual entry never surface here: they count as a
/// failed predicate for that entry and filtering continues with the next
/// one.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A parameter that must be a sequence held something else
    #[error("expected {param} to be an array, found {found}")]
    ExpectedArray {
        param: &'static str,
        found: &'static str,
    },

    /// A parameter that must be a string held something else
    #[error("expected {param} to be a string, found {found}")]
    ExpectedString {
        param: &'static str,
        found: &'static str,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
