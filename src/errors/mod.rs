//! Error types for the lexer and keyword store.
//!
//! Tokenization itself never fails; errors here come from out-of-range
//! keyword queries, strict-mode token checks, and source loading.

pub mod errors;
