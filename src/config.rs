//! Configuration Module
//!
//! Handles loading memoization defaults from environment variables.

use std::env;

use crate::memo::DEFAULT_MAX_REUSE;

/// Memoization configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoConfig {
    /// Number of times a cached result may be served before it is recomputed
    pub max_reuse: usize,
    /// Report the execution time of every fresh computation
    pub time_calls: bool,
}

impl MemoConfig {
    /// Creates a new MemoConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_MAX_REUSE` - Reuse bound per cached call (default: 10)
    /// - `MEMO_TIME_CALLS` - Log execution time of fresh calls (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// Unparsable values, and a reuse bound of zero, fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            max_reuse: lookup("MEMO_MAX_REUSE")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&bound: &usize| bound > 0)
                .unwrap_or(defaults.max_reuse),
            time_calls: lookup("MEMO_TIME_CALLS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.time_calls),
        }
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            max_reuse: DEFAULT_MAX_REUSE,
            time_calls: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
