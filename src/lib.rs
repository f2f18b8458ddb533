//! Callcache - Bounded-reuse memoization and iterator helpers
//!
//! Caches function results per call signature, serving each cached result a
//! limited number of times before recomputing it. Also provides a lookahead
//! adapter that flags the last element of an iterator, and an execution
//! timer that reports through `tracing`.

pub mod config;
pub mod error;
pub mod iter;
pub mod memo;
pub mod timing;

pub use config::MemoConfig;
pub use error::{MemoError, Result};
pub use iter::{lastloop, LastLoop, LastLoopExt};
pub use memo::{memoize, memoize_fallible, CacheStats, CallArgs, CallCache, Memoized};
pub use timing::{timed, timed_with_elapsed};
