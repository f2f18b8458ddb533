//! Memoized Function Wrapper
//!
//! Binds a function to its own [`CallCache`] so callers invoke it like the
//! original, with repeated calls served from the cache.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::config::MemoConfig;
use crate::error::Result;
use crate::memo::{CacheStats, CallCache};
use crate::timing::timed;

/// Wraps `func` with the default reuse bound of 10.
///
/// # Example
/// ```
/// use callcache::memoize;
///
/// let mut square = memoize("square", |n: &u64| n * n);
/// assert_eq!(*square.call(12), 144);
/// assert_eq!(square.stats().misses, 1);
/// ```
pub fn memoize<K, R, F>(name: impl Into<String>, func: F) -> Memoized<K, R, F>
where
    K: Hash + Eq,
    F: FnMut(&K) -> R,
{
    Memoized::with_cache(name, func, CallCache::with_default_bound())
}

/// Wraps a function returning `Result` with the default reuse bound of 10.
///
/// Only `Ok` values are cached; see [`Memoized::try_call`].
pub fn memoize_fallible<K, R, E, F>(name: impl Into<String>, func: F) -> Memoized<K, R, F>
where
    K: Hash + Eq,
    F: FnMut(&K) -> std::result::Result<R, E>,
{
    Memoized::with_cache(name, func, CallCache::with_default_bound())
}

// == Memoized ==
/// A function together with the cache of its past results.
///
/// Use [`call`](Self::call) for plain functions and
/// [`try_call`](Self::try_call) for functions returning `Result`.
pub struct Memoized<K, R, F> {
    name: String,
    func: F,
    cache: CallCache<K, R>,
    time_calls: bool,
}

impl<K, R, F> Memoized<K, R, F>
where
    K: Hash + Eq,
{
    /// Wraps `func` with an explicit reuse bound.
    pub fn new(name: impl Into<String>, func: F, max_reuse: usize) -> Result<Self> {
        Ok(Self::with_cache(name, func, CallCache::new(max_reuse)?))
    }

    /// Wraps `func` around an existing, possibly pre-filled, cache.
    pub fn with_cache(name: impl Into<String>, func: F, cache: CallCache<K, R>) -> Self {
        Self {
            name: name.into(),
            func,
            cache,
            time_calls: false,
        }
    }

    /// Wraps `func` using the bound and timing flag from `config`.
    pub fn from_config(name: impl Into<String>, func: F, config: &MemoConfig) -> Result<Self> {
        let mut memoized = Self::new(name, func, config.max_reuse)?;
        memoized.time_calls = config.time_calls;
        Ok(memoized)
    }

    /// Logs the execution time of every fresh computation.
    pub fn with_timing(mut self, enabled: bool) -> Self {
        self.time_calls = enabled;
        self
    }

    // == Call ==
    /// Invokes the wrapped function, or returns its cached result.
    pub fn call(&mut self, args: K) -> Arc<R>
    where
        F: FnMut(&K) -> R,
    {
        let Self {
            name,
            func,
            cache,
            time_calls,
        } = self;

        cache.get_or_compute(args, |args| {
            if *time_calls {
                timed(name.as_str(), || func(args))
            } else {
                func(args)
            }
        })
    }

    // == Try Call ==
    /// Invokes a fallible wrapped function, or returns its cached result.
    ///
    /// Errors are returned unchanged and never cached.
    pub fn try_call<E>(&mut self, args: K) -> std::result::Result<Arc<R>, E>
    where
        F: FnMut(&K) -> std::result::Result<R, E>,
    {
        let Self {
            name,
            func,
            cache,
            time_calls,
        } = self;

        cache.try_get_or_compute(args, |args| {
            if *time_calls {
                timed(name.as_str(), || func(args))
            } else {
                func(args)
            }
        })
    }

    /// Name used in log records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cache holding this function's results.
    pub fn cache(&self) -> &CallCache<K, R> {
        &self.cache
    }

    /// Returns the cache mutably, e.g. to invalidate an entry.
    pub fn cache_mut(&mut self) -> &mut CallCache<K, R> {
        &mut self.cache
    }

    /// Returns statistics of the owned cache.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<K, R, F> fmt::Debug for Memoized<K, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("cache", &self.cache)
            .field("time_calls", &self.time_calls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemoError;
    use crate::memo::CallArgs;
    use std::cell::Cell;

    #[test]
    fn test_memoize_default_bound() {
        let memo = memoize("noop", |_: &()| ());
        assert_eq!(memo.cache().max_reuse(), 10);
        assert_eq!(memo.name(), "noop");
    }

    #[test]
    fn test_new_rejects_zero_bound() {
        let result: Result<Memoized<u8, u8, _>> = Memoized::new("noop", |_: &u8| 0u8, 0);
        assert!(matches!(result, Err(MemoError::InvalidReuseBound(0))));
    }

    #[test]
    fn test_call_counts_underlying_invocations() {
        let calls = Cell::new(0);
        let mut add = Memoized::new(
            "add",
            |(a, b): &(i32, i32)| {
                calls.set(calls.get() + 1);
                a + b
            },
            2,
        )
        .unwrap();

        assert_eq!(*add.call((1, 2)), 3);
        assert_eq!(*add.call((1, 2)), 3);
        assert_eq!(calls.get(), 1);

        assert_eq!(*add.call((1, 2)), 3);
        assert_eq!(calls.get(), 2, "Third call should recompute at bound 2");

        add.call((3, 4));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_try_call_propagates_error() {
        let mut parse = memoize_fallible("parse", |text: &String| text.parse::<i64>());

        assert_eq!(*parse.try_call("17".to_string()).unwrap(), 17);
        assert!(parse.try_call("seventeen".to_string()).is_err());
        assert_eq!(parse.cache().len(), 1);
        assert_eq!(parse.stats().failures, 1);
    }

    #[test]
    fn test_call_with_dynamic_args() {
        let calls = Cell::new(0);
        let mut greet = memoize("greet", |args: &CallArgs| {
            calls.set(calls.get() + 1);
            let name: String = args.positional_as(0).unwrap_or_default();
            let punct: String = args.keyword_as("punct").unwrap_or_else(|_| "!".into());
            format!("Hello, {}{}", name, punct)
        });

        let args = CallArgs::new().arg("Ann").unwrap().kwarg("punct", "?").unwrap();
        assert_eq!(*greet.call(args.clone()), "Hello, Ann?");
        assert_eq!(*greet.call(args), "Hello, Ann?");
        assert_eq!(*greet.call(CallArgs::new()), "Hello, !");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = MemoConfig {
            max_reuse: 3,
            time_calls: true,
        };
        let mut memo = Memoized::from_config("len", |s: &&str| s.len(), &config).unwrap();

        assert_eq!(*memo.call("abc"), 3);
        assert_eq!(memo.cache().max_reuse(), 3);
    }

    #[test]
    fn test_cache_mut_invalidate() {
        let calls = Cell::new(0);
        let mut memo = memoize("id", |n: &u8| {
            calls.set(calls.get() + 1);
            *n
        })
        .with_timing(true);

        memo.call(1);
        memo.cache_mut().invalidate(&1);
        memo.call(1);

        assert_eq!(calls.get(), 2);
    }
}
