//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LEX_ERROR!` - Creates a LexError instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$position` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConst, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates a LexError instance.
///
/// ```ignore
/// let error = MK_LEX_ERROR!(LexErrorKind::IsolatedBang, Position::new(3, 7));
/// ```
#[macro_export]
macro_rules! MK_LEX_ERROR {
    ($kind:expr, $position:expr) => {
        $crate::errors::errors::LexError::new($kind, $position)
    };
}
