#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{scan, Scanner};
pub use lexer::tokens::{Token, TokenKind};

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
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
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some("second"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        use crate::errors::errors::{LexError, LexErrorKind};
        use crate::Position;

        let source = "int x;\n    x = 3.;\n";
        let error = LexError::new(LexErrorKind::MalformedFloat, Position::new(2, 11));
        let rendered = super::render_error(&error, source, "prog.c");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            "Error: MalformedFloat (add at least one digit after the decimal point)"
        );
        assert_eq!(lines[1], "-> prog.c");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x = 3.;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_without_tip() {
        use crate::errors::errors::{LexError, LexErrorKind};
        use crate::Position;

        let error = LexError::new(LexErrorKind::IncompleteEscape, Position::new(1, 3));
        let rendered = super::render_error(&error, "'\\", "esc.c");

        assert!(rendered.starts_with("Error: IncompleteEscape\n"));
        assert!(rendered.ends_with("  | --^\n"));
    }
}

/// Renders a lexical error as a source snippet with a caret under the
/// offending column.
pub fn render_error(error: &LexError, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> prog.c
          |
        2 | x = 3.;
          | ------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
