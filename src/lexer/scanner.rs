use log::{debug, trace};

use crate::{
    keywords::{KeywordStore, RESERVED},
    Position, MK_TOKEN,
};

use super::{
    config::UnknownPolicy,
    dfa::{classify, CharClass},
    tokens::{lookup_type_name, Token, TokenKind},
};

/// Hand-written scanner that always records positions.
///
/// On top of the DFA's rules it recognises the built-in type names and
/// folds a unary `+`/`-` directly in front of a digit into the number.
pub struct Scanner<'a> {
    source: &'a str,
    keywords: &'a KeywordStore,
    unknown_policy: UnknownPolicy,
    cursor: usize,
    position: Position,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner::with_keywords(source, &RESERVED)
    }

    pub fn with_keywords(source: &'a str, keywords: &'a KeywordStore) -> Scanner<'a> {
        Scanner {
            source,
            keywords,
            unknown_policy: UnknownPolicy::default(),
            cursor: 0,
            position: Position::start(),
        }
    }

    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Scanner<'a> {
        self.unknown_policy = policy;
        self
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = vec![];

        while let Some(ch) = self.peek() {
            let start = self.position;

            match classify(ch) {
                CharClass::Whitespace | CharClass::Newline => self.bump(ch),
                CharClass::Letter => {
                    let word = self.take_while(|c| {
                        matches!(classify(c), CharClass::Letter | CharClass::Digit)
                    });
                    let kind = self.classify_word(word);
                    tokens.push(MK_TOKEN!(kind, String::from(word), Some(start)));
                }
                CharClass::Digit => {
                    let number = self.take_number();
                    tokens.push(MK_TOKEN!(number_kind(number), String::from(number), Some(start)));
                }
                CharClass::Operator if self.starts_signed_number(ch, &tokens) => {
                    let sign_start = self.cursor;
                    self.bump(ch);
                    self.take_number();
                    let number = &self.source[sign_start..self.cursor];
                    tokens.push(MK_TOKEN!(number_kind(number), String::from(number), Some(start)));
                }
                CharClass::Operator => {
                    self.bump(ch);
                    tokens.push(MK_TOKEN!(TokenKind::Operator, ch.to_string(), Some(start)));
                }
                CharClass::Punctuator => {
                    self.bump(ch);
                    tokens.push(MK_TOKEN!(TokenKind::Punctuator, ch.to_string(), Some(start)));
                }
                CharClass::Dot | CharClass::Other => {
                    self.bump(ch);
                    match self.unknown_policy {
                        UnknownPolicy::Emit => {
                            tokens.push(MK_TOKEN!(TokenKind::Unknown, ch.to_string(), Some(start)))
                        }
                        UnknownPolicy::Skip => trace!("skipping unrecognised {:?} at {}", ch, start),
                    }
                }
            }
        }

        debug!("scanner produced {} tokens", tokens.len());
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.source[self.cursor..].chars().nth(1)
    }

    fn bump(&mut self, ch: char) {
        self.cursor += ch.len_utf8();
        self.position.advance(ch);
    }

    fn take_while(&mut self, mut accept: impl FnMut(char) -> bool) -> &'a str {
        let source = self.source;
        let start = self.cursor;
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            self.bump(ch);
        }

        &source[start..self.cursor]
    }

    /// Digits with at most one decimal point; a second point ends the number.
    fn take_number(&mut self) -> &'a str {
        let mut seen_dot = false;
        self.take_while(|ch| match classify(ch) {
            CharClass::Digit => true,
            CharClass::Dot if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if let Some(kind) = lookup_type_name(word) {
            kind
        } else {
            TokenKind::Identifier
        }
    }

    fn starts_signed_number(&self, ch: char, tokens: &[Token]) -> bool {
        if ch != '+' && ch != '-' {
            return false;
        }
        if !matches!(self.peek_second().map(classify), Some(CharClass::Digit)) {
            return false;
        }

        // Binary after an operand, unary anywhere else.
        match tokens.last() {
            None => true,
            Some(last) => !(last.kind == TokenKind::Identifier
                || last.kind.is_numeric()
                || (last.kind == TokenKind::Punctuator && last.value == ")")),
        }
    }
}

fn number_kind(number: &str) -> TokenKind {
    if number.contains('.') {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntegerLiteral
    }
}
