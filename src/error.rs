//! Error types for the memoization utilities
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Memo Error Enum ==
/// Unified error type for cache construction and call signatures.
///
/// Errors raised by a wrapped function are never converted into this type;
/// they are handed back to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    /// Reuse bound that would make an entry unusable
    #[error("Invalid reuse bound: {0} (must be at least 1)")]
    InvalidReuseBound(usize),

    /// Argument value that could not be encoded into a call signature
    #[error("Invalid call signature: {0}")]
    Signature(String),
}

impl From<serde_json::Error> for MemoError {
    fn from(err: serde_json::Error) -> Self {
        MemoError::Signature(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the memoization utilities.
pub type Result<T> = std::result::Result<T, MemoError>;
