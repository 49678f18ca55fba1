//! Lexical analysis.
//!
//! This module turns source text into classified tokens. It provides:
//!
//! - The token model and the closed set of token kinds
//! - A table-driven finite-state analyzer (the default)
//! - A hand-written scanner and a regex pattern-table lexer as alternatives
//! - Configuration for variant choice, unknown-character policy and positions

pub mod config;
pub mod dfa;
pub mod lexer;
pub mod pattern;
pub mod scanner;
pub mod tokens;

pub use config::{LexerConfig, UnknownPolicy, Variant};
pub use lexer::{check_tokens, tokenize, tokenize_with_keywords};
pub use tokens::{Token, TokenKind};
