//! Call Signature Module
//!
//! Captures dynamic positional and keyword arguments as a hashable cache key.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{MemoError, Result};
use crate::memo::canonical::to_canonical_value;

// == Call Args ==
/// Positional and keyword arguments of one call.
///
/// Equality and hashing use a canonical JSON encoding of both parts. Keywords
/// are kept sorted by name, so the order in which they were supplied does not
/// affect the key.
///
/// Values compare by their serde data model value, not by Rust type: a tuple
/// and a `Vec` with the same elements are both JSON arrays and therefore the
/// same argument, as are `1u8` and `1i64`. Integers and floats stay distinct
/// (`1` is not `1.0`). Non-finite floats are rejected and `-0.0` is stored
/// as `0.0`.
#[derive(Debug, Clone)]
pub struct CallArgs {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
    /// Canonical encoding of `(positional, keyword)`
    signature: String,
}

impl CallArgs {
    // == Constructor ==
    /// Creates an empty signature (a call with no arguments).
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
            signature: String::from("[[],{}]"),
        }
    }

    // == Positional ==
    /// Appends a positional argument.
    pub fn arg<T: Serialize>(mut self, value: T) -> Result<Self> {
        self.positional.push(to_canonical_value(&value)?);
        self.reencode()?;
        Ok(self)
    }

    // == Keyword ==
    /// Sets a keyword argument, replacing an earlier value with the same name.
    pub fn kwarg<T: Serialize>(mut self, name: impl Into<String>, value: T) -> Result<Self> {
        self.keyword.insert(name.into(), to_canonical_value(&value)?);
        self.reencode()?;
        Ok(self)
    }

    /// Returns the positional arguments in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the keyword arguments sorted by name.
    pub fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Decodes the positional argument at `index`.
    pub fn positional_as<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self.positional.get(index).ok_or_else(|| {
            MemoError::Signature(format!("missing positional argument {}", index))
        })?;
        Ok(T::deserialize(value)?)
    }

    /// Decodes the keyword argument called `name`.
    pub fn keyword_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .keyword
            .get(name)
            .ok_or_else(|| MemoError::Signature(format!("missing keyword argument '{}'", name)))?;
        Ok(T::deserialize(value)?)
    }

    /// Returns true if the call carries no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Returns the canonical encoding used as the cache key.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    fn reencode(&mut self) -> Result<()> {
        self.signature = serde_json::to_string(&(&self.positional, &self.keyword))?;
        Ok(())
    }
}

impl Default for CallArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for CallArgs {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for CallArgs {}

impl Hash for CallArgs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature)
    }
}
