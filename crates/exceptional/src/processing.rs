//! Short-circuiting fold of per-element containers into one aggregate.

use crate::exceptional::{Exceptional, State};
use crate::failure::Failure;

/// Aggregate of folding a collection through a container-producing mapper:
/// the values accumulated before the first failure, plus that failure when
/// one occurred.
#[derive(Debug)]
pub struct ProcessingResult<T> {
    success_results: Vec<T>,
    failure: Option<Failure>,
}

impl<T> ProcessingResult<T> {
    /// Build an aggregate from its parts.
    #[must_use]
    pub const fn new(success_results: Vec<T>, failure: Option<Failure>) -> Self {
        Self {
            success_results,
            failure,
        }
    }

    /// Values accumulated before folding stopped, in input order.
    #[must_use]
    pub fn success_results(&self) -> &[T] {
        &self.success_results
    }

    /// The first failure encountered, when one stopped the fold.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Returns true when the whole collection was processed without a
    /// failure.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Split the aggregate into the accumulated values and the failure
    /// slot re-wrapped as a container, for uniform downstream handling:
    /// failure state when the fold stopped early, empty state otherwise.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Exceptional<T>) {
        let rewrapped = match self.failure {
            Some(failure) => Exceptional::of_exception(failure),
            None => Exceptional::empty(),
        };
        (self.success_results, rewrapped)
    }
}

impl<T> Exceptional<ProcessingResult<T>> {
    /// Fold a collection through a container-producing mapper.
    ///
    /// Values append to the success list; the first failure stops the fold
    /// immediately (remaining elements are never processed) and becomes
    /// the aggregate failure; empty results contribute nothing and the
    /// fold continues. The aggregate always comes back in value state,
    /// since folding itself cannot fail.
    pub fn process_collection<C, I, F>(items: I, mut mapper: F) -> Self
    where
        I: IntoIterator<Item = C>,
        F: FnMut(C) -> Exceptional<T>,
    {
        let items = items.into_iter();
        let mut success_results = Vec::with_capacity(items.size_hint().0);
        for item in items {
            match mapper(item).state {
                State::Value(value) => success_results.push(value),
                State::Failure { failure, .. } => {
                    return Self::of(ProcessingResult::new(success_results, Some(failure)));
                },
                State::Empty => {},
            }
        }
        Self::of(ProcessingResult::new(success_results, None))
    }
}
