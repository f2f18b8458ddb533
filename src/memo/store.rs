//! Call Cache Module
//!
//! Main memoization engine: a keyed map of call results with a per-entry
//! reuse bound.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::MemoConfig;
use crate::error::{MemoError, Result};
use crate::memo::{CacheStats, CallEntry, DEFAULT_MAX_REUSE};

// == Call Cache ==
/// Stores results of one function keyed by its call signature.
///
/// Each entry may be served `max_reuse` times in total (the fresh call plus
/// `max_reuse - 1` hits). The call after that drops the entry and recomputes.
pub struct CallCache<K, R> {
    /// Signature to result storage
    entries: HashMap<K, CallEntry<R>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of times an entry may be served
    max_reuse: usize,
}

impl<K, R> CallCache<K, R>
where
    K: Hash + Eq,
{
    // == Constructor ==
    /// Creates an empty cache with the given reuse bound.
    ///
    /// # Errors
    /// Returns `MemoError::InvalidReuseBound` if `max_reuse` is zero.
    pub fn new(max_reuse: usize) -> Result<Self> {
        if max_reuse == 0 {
            return Err(MemoError::InvalidReuseBound(max_reuse));
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_reuse,
        })
    }

    /// Creates an empty cache with the default reuse bound of 10.
    pub fn with_default_bound() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_reuse: DEFAULT_MAX_REUSE,
        }
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &MemoConfig) -> Result<Self> {
        Self::new(config.max_reuse)
    }

    // == Get Or Compute ==
    /// Returns the stored result for `key`, or computes and stores it.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> Arc<R>
    where
        F: FnOnce(&K) -> R,
    {
        match self.try_get_or_compute(key, |k| Ok::<R, std::convert::Infallible>(compute(k))) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    // == Try Get Or Compute ==
    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// An error from `compute` is returned unchanged and nothing is stored
    /// for `key`.
    pub fn try_get_or_compute<F, E>(&mut self, key: K, compute: F) -> std::result::Result<Arc<R>, E>
    where
        F: FnOnce(&K) -> std::result::Result<R, E>,
    {
        if let Some(result) = self.lookup(&key) {
            return Ok(result);
        }

        self.stats.record_miss();
        let value = match compute(&key) {
            Ok(value) => value,
            Err(err) => {
                self.stats.record_failure();
                debug!(entries = self.entries.len(), "Wrapped call failed, nothing cached");
                return Err(err);
            }
        };

        let entry = CallEntry::new(value);
        let result = entry.result();
        self.entries.insert(key, entry);
        debug!(entries = self.entries.len(), "Stored fresh call result");

        Ok(result)
    }

    // == Lookup ==
    /// Serves a hit, or drops an entry that reached the bound.
    fn lookup(&mut self, key: &K) -> Option<Arc<R>> {
        let entry = self.entries.get_mut(key)?;

        if entry.is_spent(self.max_reuse) {
            let uses = entry.uses();
            self.entries.remove(key);
            self.stats.record_expiration();
            debug!(uses, max_reuse = self.max_reuse, "Cached call expired, recomputing");
            return None;
        }

        let result = entry.reuse();
        trace!(uses = entry.uses(), max_reuse = self.max_reuse, "Cache hit");
        self.stats.record_hit();
        Some(result)
    }

    // == Peek ==
    /// Returns the stored result for `key` without counting a use.
    pub fn peek(&self, key: &K) -> Option<Arc<R>> {
        self.entries.get(key).map(CallEntry::result)
    }

    /// Returns how many times the entry for `key` has been served.
    pub fn uses(&self, key: &K) -> Option<usize> {
        self.entries.get(key).map(CallEntry::uses)
    }

    // == Invalidate ==
    /// Removes the entry for `key`.
    ///
    /// Returns true if an entry was present.
    pub fn invalidate(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    ///
    /// `total_entries` is taken from the map at the time of the call.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the reuse bound.
    pub fn max_reuse(&self) -> usize {
        self.max_reuse
    }

    // == Length ==
    /// Returns the number of stored call signatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, R> Default for CallCache<K, R>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::with_default_bound()
    }
}

impl<K, R> fmt::Debug for CallCache<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallCache")
            .field("entries", &self.entries.len())
            .field("max_reuse", &self.max_reuse)
            .field("stats", &self.stats)
            .finish()
    }
}
