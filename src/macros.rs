//! Utility macros for the analyzers.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CLASS_HANDLER!` - Creates a pattern-lexer handler for a fixed token kind

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$position` - `Option<Position>` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), None);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a pattern-lexer handler that emits the matched text as a token
/// of a fixed kind.
///
/// # Example
///
/// ```ignore
/// Pattern {
///     regex: Regex::new(r"^[+\-*/]").unwrap(),
///     handler: MK_CLASS_HANDLER!(TokenKind::Operator),
/// }
/// ```
#[macro_export]
macro_rules! MK_CLASS_HANDLER {
    ($kind:expr) => {
        |lexer: &mut PatternLexer, matched: &str| {
            lexer.push($crate::MK_TOKEN!($kind, String::from(matched), Some(lexer.position)));
            lexer.advance(matched);
        }
    };
}
