use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    keywords::{KeywordStore, RESERVED},
    Position, MK_CLASS_HANDLER, MK_TOKEN,
};

use super::{
    config::UnknownPolicy,
    tokens::{Token, TokenKind},
};

pub type PatternHandler = fn(&mut PatternLexer<'_>, &str);

pub struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

impl Pattern {
    fn new(regex: &str, handler: PatternHandler) -> Pattern {
        Pattern {
            regex: Regex::new(regex).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order; every pattern is anchored and consumes at least one character.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        Pattern::new(r"^[0-9]+(\.[0-9]+)?", MK_CLASS_HANDLER!(TokenKind::NumberLiteral)),
        Pattern::new(r"^[ \t\r\n\x0B\x0C]+", skip_handler),
        Pattern::new(r"^[+\-*/]", MK_CLASS_HANDLER!(TokenKind::Operator)),
        Pattern::new(r"^[(){};]", MK_CLASS_HANDLER!(TokenKind::Punctuator)),
    ];
}

/// Regex-table analyzer. Numbers come out as `NUMBER_LITERAL` without an
/// integer/float distinction, and every token carries its position.
pub struct PatternLexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    cursor: usize,
    position: Position,
    keywords: &'a KeywordStore,
    unknown_policy: UnknownPolicy,
}

impl<'a> PatternLexer<'a> {
    pub fn new(source: &'a str) -> PatternLexer<'a> {
        PatternLexer::with_keywords(source, &RESERVED)
    }

    pub fn with_keywords(source: &'a str, keywords: &'a KeywordStore) -> PatternLexer<'a> {
        PatternLexer {
            tokens: vec![],
            source,
            cursor: 0,
            position: Position::start(),
            keywords,
            unknown_policy: UnknownPolicy::default(),
        }
    }

    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> PatternLexer<'a> {
        self.unknown_policy = policy;
        self
    }

    pub fn advance(&mut self, matched: &str) {
        self.cursor += matched.len();
        for ch in matched.chars() {
            self.position.advance(ch);
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        let source = self.source;
        &source[self.cursor..]
    }

    pub fn at_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.at_eof() {
            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            match matched {
                Some((handler, text)) => handler(&mut self, text),
                None => self.unrecognised(remainder),
            }
        }

        debug!("pattern lexer produced {} tokens", self.tokens.len());
        self.tokens
    }

    fn unrecognised(&mut self, remainder: &str) {
        let Some(ch) = remainder.chars().next() else {
            return;
        };
        let text = &remainder[..ch.len_utf8()];

        match self.unknown_policy {
            UnknownPolicy::Emit => {
                self.push(MK_TOKEN!(TokenKind::Unknown, String::from(text), Some(self.position)))
            }
            UnknownPolicy::Skip => trace!("skipping unrecognised {:?} at {}", ch, self.position),
        }
        self.advance(text);
    }
}

fn symbol_handler(lexer: &mut PatternLexer, matched: &str) {
    let kind = if lexer.keywords.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(kind, String::from(matched), Some(lexer.position)));
    lexer.advance(matched);
}

fn skip_handler(lexer: &mut PatternLexer, matched: &str) {
    lexer.advance(matched);
}
