use std::fmt::Display;

use crate::Position;

/// The closed set of token categories.
///
/// `StringLiteral` and `LogicalLiteral` are part of the set but no analyzer
/// produces them; `true` and `false` lex as keywords.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntegerLiteral,
    FloatLiteral,
    NumberLiteral,
    StringLiteral,
    LogicalLiteral,

    IntegerType,
    FloatType,
    StringType,
    LogicalType,

    Keyword,
    Identifier,

    Operator,
    Punctuator,

    Unknown,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::NumberLiteral => "NUMBER_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::LogicalLiteral => "LOGICAL_LITERAL",
            TokenKind::IntegerType => "INTEGER_TYPE",
            TokenKind::FloatType => "FLOAT_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::LogicalType => "LOGICAL_TYPE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral | TokenKind::NumberLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps the built-in type names onto their type-token kinds.
pub fn lookup_type_name(word: &str) -> Option<TokenKind> {
    match word {
        "int" => Some(TokenKind::IntegerType),
        "float" => Some(TokenKind::FloatType),
        "bool" => Some(TokenKind::LogicalType),
        "string" => Some(TokenKind::StringType),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Option<Position>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Token value: {}", self.value)?;
        write!(f, "Token type: {}", self.kind)?;
        if let Some(position) = self.position {
            write!(f, "\nToken position: line: {}", position.line)?;
            write!(f, "\nToken position: column: {}", position.column)?;
        }

        Ok(())
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Token {
        Token {
            kind,
            value: value.into(),
            position: None,
        }
    }

    pub fn at(mut self, position: Position) -> Token {
        self.position = Some(position);
        self
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
