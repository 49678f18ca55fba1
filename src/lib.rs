#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod keywords;
pub mod lexer;
pub mod macros;

extern crate regex;

/// 1-based line and column of a character in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }

    /// Moves past `ch`, wrapping to the next line on `'\n'`.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{get_line, render_error, Position};
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(get_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_line(source, 2), Some("second"));
        assert_eq!(get_line(source, 3), Some(""));
        assert_eq!(get_line(source, 4), Some("Testing { }"));
        assert_eq!(get_line(source, 0), None);
        assert_eq!(get_line(source, 9), None);
    }

    #[test]
    fn test_position_advance() {
        let mut position = Position::start();
        position.advance('a');
        position.advance('b');
        assert_eq!(position, Position::new(1, 3));

        position.advance('\n');
        assert_eq!(position, Position::new(2, 1));
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "const x\n    y = 5;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "=".to_string(),
            },
            Some(Position::new(2, 7)),
        );

        let rendered = render_error(&error, "input.txt", source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> input.txt:2:7");
        assert_eq!(lines[3], "2 | y = 5;");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_render_error_without_position() {
        let error = Error::new(ErrorImpl::KeywordIndexOutOfRange { index: 20, len: 13 }, None);

        let rendered = render_error(&error, "input.txt", "");
        assert_eq!(
            rendered,
            "Error: KeywordIndexOutOfRange (Keyword indices start at 1 and end at 13)\n"
        );
    }
}

/// Formats `error` with a caret under the offending column when it has a
/// position.
pub fn render_error(error: &Error, file: &str, source: &str) -> String {
    /*
        Error: UnrecognisedToken
        -> input.txt:20:9
           |
        20 | let a = #;
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let Some(position) = error.get_position() else {
        return out;
    };
    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "-> {}:{}", file, position);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    print!("{}", render_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
