//! Reserved-word storage.
//!
//! This module contains the keyword store used by every analyzer to tell
//! keywords apart from plain identifiers. It provides:
//!
//! - A prefix tree kept in an index-based node arena
//! - Membership tests for complete words
//! - Order-statistic lookup of the k-th word in lexicographic order
//! - The fixed reserved-word list and a shared store built from it

pub mod trie;

pub use trie::{KeywordStore, RESERVED, RESERVED_WORDS};

#[cfg(test)]
mod tests;
