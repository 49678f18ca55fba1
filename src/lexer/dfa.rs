use log::{debug, trace};

use crate::{
    keywords::{KeywordStore, RESERVED},
    Position, MK_TOKEN,
};

use super::{
    config::{LexerConfig, UnknownPolicy},
    tokens::{Token, TokenKind},
};

/// Character classes the transition table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Newline,
    Letter,
    Digit,
    Dot,
    Operator,
    Punctuator,
    Other,
}

static CHAR_CLASS: [CharClass; 128] = {
    use CharClass as CC;

    let mut t = [CC::Other; 128];
    t[b' ' as usize] = CC::Whitespace;
    t[b'\t' as usize] = CC::Whitespace;
    t[b'\r' as usize] = CC::Whitespace;
    t[0x0b] = CC::Whitespace;
    t[0x0c] = CC::Whitespace;
    t[b'\n' as usize] = CC::Newline;

    let mut i = b'a';
    while i <= b'z' {
        t[i as usize] = CC::Letter;
        t[i.to_ascii_uppercase() as usize] = CC::Letter;
        i += 1;
    }
    t[b'_' as usize] = CC::Letter;

    let mut i = b'0';
    while i <= b'9' {
        t[i as usize] = CC::Digit;
        i += 1;
    }

    t[b'.' as usize] = CC::Dot;

    t[b'+' as usize] = CC::Operator;
    t[b'-' as usize] = CC::Operator;
    t[b'*' as usize] = CC::Operator;
    t[b'/' as usize] = CC::Operator;

    t[b'(' as usize] = CC::Punctuator;
    t[b')' as usize] = CC::Punctuator;
    t[b'{' as usize] = CC::Punctuator;
    t[b'}' as usize] = CC::Punctuator;
    t[b';' as usize] = CC::Punctuator;

    t
};

/// Looks up the class of `ch`. Anything outside ASCII is `Other`.
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii() {
        CHAR_CLASS[ch as usize]
    } else {
        CharClass::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    InIdentifier,
    InNumber,
    /// Digits after the single decimal point of a number.
    InFraction,
    InOperator,
    /// Finalize the pending token; the character is rescanned from `Start`.
    Done,
    /// Finalize the pending token and reject the character.
    Error,
}

/// The transition table, keyed on character class.
///
/// `Done` and `Error` never persist, so leaving them behaves like `Start`.
pub fn transition_class(state: State, class: CharClass) -> State {
    use CharClass as CC;

    match (state, class) {
        (State::Start | State::Done | State::Error, CC::Whitespace | CC::Newline) => State::Start,
        (State::Start | State::Done | State::Error, CC::Letter) => State::InIdentifier,
        (State::Start | State::Done | State::Error, CC::Digit) => State::InNumber,
        (State::Start | State::Done | State::Error, CC::Operator | CC::Punctuator) => {
            State::InOperator
        }
        (State::Start | State::Done | State::Error, CC::Dot | CC::Other) => State::Error,

        (State::InIdentifier, CC::Letter | CC::Digit) => State::InIdentifier,
        (State::InIdentifier, _) => State::Done,

        (State::InNumber, CC::Digit) => State::InNumber,
        (State::InNumber, CC::Dot) => State::InFraction,
        (State::InNumber, _) => State::Done,

        (State::InFraction, CC::Digit) => State::InFraction,
        (State::InFraction, _) => State::Done,

        (State::InOperator, _) => State::Done,
    }
}

pub fn transition(state: State, ch: char) -> State {
    transition_class(state, classify(ch))
}

/// Table-driven analyzer.
///
/// The pending token is the slice of source between `token_start` and
/// `cursor`; it is empty exactly when the machine is in `Start`.
pub struct Analyzer<'a> {
    source: &'a str,
    keywords: &'a KeywordStore,
    config: LexerConfig,
    cursor: usize,
    state: State,
    token_start: usize,
    position: Position,
    token_position: Position,
}

impl<'a> Analyzer<'a> {
    pub fn new(source: &'a str) -> Analyzer<'a> {
        Analyzer::with_keywords(source, &RESERVED)
    }

    pub fn with_keywords(source: &'a str, keywords: &'a KeywordStore) -> Analyzer<'a> {
        Analyzer {
            source,
            keywords,
            config: LexerConfig::default(),
            cursor: 0,
            state: State::Start,
            token_start: 0,
            position: Position::start(),
            token_position: Position::start(),
        }
    }

    pub fn with_config(mut self, config: LexerConfig) -> Analyzer<'a> {
        self.config = config;
        self
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = vec![];

        while let Some(ch) = self.peek() {
            match transition(self.state, ch) {
                State::Start => {
                    self.consume(ch);
                    self.token_start = self.cursor;
                }
                State::Done => self.finalize(&mut tokens),
                State::Error => {
                    self.finalize(&mut tokens);
                    self.reject(ch, &mut tokens);
                }
                next => {
                    if self.state == State::Start {
                        self.token_start = self.cursor;
                        self.token_position = self.position;
                    }
                    self.consume(ch);
                    self.state = next;
                }
            }
        }

        // End of input finalizes whatever is still pending.
        self.finalize(&mut tokens);

        debug!("dfa produced {} tokens", tokens.len());
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn consume(&mut self, ch: char) {
        self.cursor += ch.len_utf8();
        self.position.advance(ch);
    }

    fn token_position(&self) -> Option<Position> {
        self.config.track_positions.then_some(self.token_position)
    }

    fn finalize(&mut self, tokens: &mut Vec<Token>) {
        let text = &self.source[self.token_start..self.cursor];

        if !text.is_empty() {
            let kind = match self.state {
                State::InIdentifier if self.keywords.contains(text) => TokenKind::Keyword,
                State::InIdentifier => TokenKind::Identifier,
                State::InNumber => TokenKind::IntegerLiteral,
                State::InFraction => TokenKind::FloatLiteral,
                State::InOperator => match text.chars().next().map(classify) {
                    Some(CharClass::Punctuator) => TokenKind::Punctuator,
                    _ => TokenKind::Operator,
                },
                State::Start | State::Done | State::Error => TokenKind::Unknown,
            };

            trace!("{} {:?}", kind, text);
            tokens.push(MK_TOKEN!(kind, String::from(text), self.token_position()));
        }

        self.state = State::Start;
        self.token_start = self.cursor;
    }

    fn reject(&mut self, ch: char, tokens: &mut Vec<Token>) {
        let position = self.config.track_positions.then_some(self.position);
        self.consume(ch);
        self.token_start = self.cursor;

        match self.config.unknown_policy {
            UnknownPolicy::Emit => {
                tokens.push(MK_TOKEN!(TokenKind::Unknown, ch.to_string(), position));
            }
            UnknownPolicy::Skip => trace!("skipping unrecognised {:?}", ch),
        }
    }
}
