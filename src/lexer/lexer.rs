use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    keywords::{KeywordStore, RESERVED},
};

use super::{
    config::{LexerConfig, Variant},
    dfa::Analyzer,
    pattern::PatternLexer,
    scanner::Scanner,
    tokens::{Token, TokenKind},
};

/// Tokenizes `source` with the reserved-word store and the analyzer
/// selected by `config`.
pub fn tokenize(source: &str, config: &LexerConfig) -> Vec<Token> {
    tokenize_with_keywords(source, &RESERVED, config)
}

pub fn tokenize_with_keywords(
    source: &str,
    keywords: &KeywordStore,
    config: &LexerConfig,
) -> Vec<Token> {
    debug!(
        "tokenizing {} bytes with {:?} analyzer",
        source.len(),
        config.variant
    );

    match config.variant {
        Variant::Dfa => Analyzer::with_keywords(source, keywords)
            .with_config(*config)
            .tokenize(),
        Variant::Scanner => Scanner::with_keywords(source, keywords)
            .with_unknown_policy(config.unknown_policy)
            .tokenize(),
        Variant::Pattern => PatternLexer::with_keywords(source, keywords)
            .with_unknown_policy(config.unknown_policy)
            .tokenize(),
    }
}

/// Fails on the first `UNKNOWN` token.
pub fn check_tokens(tokens: &[Token]) -> Result<(), Error> {
    match tokens.iter().find(|token| token.kind == TokenKind::Unknown) {
        Some(token) => Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            token.position,
        )),
        None => Ok(()),
    }
}
