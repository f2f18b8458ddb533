//! Memo Module
//!
//! Caches function results per call signature, serving each result a bounded
//! number of times before it is recomputed.

mod canonical;
mod entry;
mod memoized;
mod signature;
mod stats;
mod store;


// Re-export public types
pub use entry::CallEntry;
pub use memoized::{memoize, memoize_fallible, Memoized};
pub use signature::CallArgs;
pub use stats::CacheStats;
pub use store::CallCache;

// == Public Constants ==
/// Number of times a cached result is served before it is recomputed
pub const DEFAULT_MAX_REUSE: usize = 10;
