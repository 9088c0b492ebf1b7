//! The PredicateChain composes multiple predicates.
//!
//! This module provides the PredicateChain struct that chains predicates
//! together using the builder pattern and evaluates them as a
//! short-circuiting AND.

use crate::traits::Predicate;
use catalog::value::Entry;

/// Chains predicates into a single conjunctive condition.
///
/// ## Usage
/// ```ignore
/// let chain = PredicateChain::new()
///     .add(AiringDayPredicate::new(2))
///     .add(MinScorePredicate::new(75));
///
/// let passes = chain.matches(&entry);
/// ```
pub struct PredicateChain {
    predicates: Vec<Box<dyn Predicate>>,
}

impl PredicateChain {
    /// Create a new empty PredicateChain.
    ///
    /// An empty chain passes every entry.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate to the chain (builder pattern).
    pub fn add(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Number of predicates in the chain.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the chain holds no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate the chain against one entry.
    ///
    /// Predicates run in insertion order and short-circuit: once one fails,
    /// the rest are not evaluated.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(entry))
    }
}

impl Default for PredicateChain {
    fn default() -> Self {
        Self::new()
    }
}
