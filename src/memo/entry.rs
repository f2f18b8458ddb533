//! Call Entry Module
//!
//! Defines the record kept for one memoized call signature.

use std::sync::Arc;

// == Call Entry ==
/// A cached call result together with its reuse counter.
#[derive(Debug)]
pub struct CallEntry<R> {
    /// The computed result, shared with every caller it was handed to
    result: Arc<R>,
    /// How many times this result has been returned, including the fresh call
    uses: usize,
}

impl<R> CallEntry<R> {
    // == Constructor ==
    /// Creates an entry for a freshly computed result.
    ///
    /// The fresh call counts as the first use.
    pub fn new(result: R) -> Self {
        Self {
            result: Arc::new(result),
            uses: 1,
        }
    }

    // == Is Spent ==
    /// Checks whether the entry has reached the reuse bound.
    ///
    /// Boundary condition: an entry is spent once `uses >= max_reuse`, so the
    /// call that finds it in this state must recompute.
    pub fn is_spent(&self, max_reuse: usize) -> bool {
        self.uses >= max_reuse
    }

    // == Reuse ==
    /// Counts one more use and returns a handle to the stored result.
    pub fn reuse(&mut self) -> Arc<R> {
        self.uses += 1;
        Arc::clone(&self.result)
    }

    /// Returns a handle to the stored result without counting a use.
    pub fn result(&self) -> Arc<R> {
        Arc::clone(&self.result)
    }

    /// Returns the number of times the result has been served.
    pub fn uses(&self) -> usize {
        self.uses
    }
}
