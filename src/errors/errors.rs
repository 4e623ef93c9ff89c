use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A recoverable lexical defect. Recording one never stops the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    internal_error: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError {
            internal_error: kind,
            position,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorKind::MalformedFloat => "MalformedFloat",
            LexErrorKind::MalformedCharConstant => "MalformedCharConstant",
            LexErrorKind::IncompleteEscape => "IncompleteEscape",
            LexErrorKind::MissingClosingQuote => "MissingClosingQuote",
            LexErrorKind::IsolatedBang => "IsolatedBang",
            LexErrorKind::UnterminatedBlockComment => "UnterminatedBlockComment",
            LexErrorKind::InvalidCharacter { .. } => "InvalidCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorKind::MalformedFloat => ErrorTip::Suggestion(String::from(
                "add at least one digit after the decimal point",
            )),
            LexErrorKind::MalformedCharConstant => ErrorTip::Suggestion(String::from(
                "a character constant cannot span lines",
            )),
            LexErrorKind::IncompleteEscape => ErrorTip::None,
            LexErrorKind::MissingClosingQuote => ErrorTip::Suggestion(String::from(
                "a character constant holds one character or one escape sequence",
            )),
            LexErrorKind::IsolatedBang => {
                ErrorTip::Suggestion(String::from("did you mean `!=`?"))
            }
            LexErrorKind::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("close the comment with `*/`"))
            }
            LexErrorKind::InvalidCharacter { ch } => ErrorTip::Suggestion(format!(
                "`{}` cannot appear outside a comment or character constant",
                ch.escape_debug()
            )),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lexical error: {} ({})", self.internal_error, self.position)
    }
}

impl std::error::Error for LexError {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("malformed float")]
    MalformedFloat,
    #[error("malformed character constant")]
    MalformedCharConstant,
    #[error("malformed character constant (incomplete escape)")]
    IncompleteEscape,
    #[error("malformed character constant (missing closing quote)")]
    MissingClosingQuote,
    #[error("isolated exclamation mark (!)")]
    IsolatedBang,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid character '{ch}'")]
    InvalidCharacter { ch: char },
}
