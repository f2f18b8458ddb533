//! Iterator Helpers
//!
//! Adapters used when walking sequences that need to know their end.

mod lastloop;

pub use lastloop::{lastloop, LastLoop, LastLoopExt};
