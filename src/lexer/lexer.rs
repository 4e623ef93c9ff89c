use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position, MK_LEX_ERROR, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, MARKERS, RESERVED_LOOKUP};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"^\p{Nd}+").unwrap();
    static ref DIGIT: Regex = Regex::new(r"^\p{Nd}$").unwrap();
    static ref LETTER: Regex = Regex::new(r"^\p{L}$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"^\p{Z}$").unwrap();
}

/// Single-pass cursor over a source buffer.
///
/// The cursor is a byte offset into `source`; `line` and `column` are kept in
/// step by `advance`, which is the only way the cursor moves.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            errors: vec![],
        }
    }

    pub fn current(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self, k: usize) -> Option<char> {
        self.remainder().chars().nth(k)
    }

    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += c.len_utf8();
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, token: Token) {
        trace!(
            target: "scanner::lexer",
            kind = %token.kind,
            lexeme = %token.lexeme,
            line = token.position.line,
            column = token.position.column,
            "token"
        );
        self.tokens.push(token);
    }

    fn error(&mut self, kind: LexErrorKind, position: Position) {
        debug!(target: "scanner::lexer", line = position.line, column = position.column, "{}", kind);
        self.errors.push(MK_LEX_ERROR!(kind, position));
    }

    /// Consumes the regex match anchored at the cursor, if any.
    fn take_run(&mut self, regex: &Regex) -> Option<&'a str> {
        let matched = regex.find(self.remainder())?.as_str();
        self.advance_n(matched.chars().count());
        Some(matched)
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.current().is_some_and(&predicate) {
            self.advance();
        }
        &self.source[start..self.pos]
    }

    /// Emits an ASCII operator or marker of `width` characters starting at the cursor.
    fn push_symbol(&mut self, kind: TokenKind, width: usize) {
        let position = self.position();
        let lexeme = String::from(&self.remainder()[..width]);
        self.advance_n(width);
        self.push(MK_TOKEN!(kind, lexeme, position));
    }

    fn skip_whitespace(&mut self) {
        while self.current().is_some_and(is_blank) {
            self.advance();
        }
    }

    fn scan_word(&mut self) {
        let position = self.position();
        let word = self.take_while(is_word_char);

        let kind = if RESERVED_LOOKUP.contains(word) {
            TokenKind::Reserved
        } else {
            TokenKind::Identifier
        };

        self.push(MK_TOKEN!(kind, String::from(word), position));
    }

    fn scan_number(&mut self) {
        let position = self.position();
        let Some(integer) = self.take_run(&DIGITS) else {
            return;
        };

        if self.current() != Some('.') {
            self.push(MK_TOKEN!(TokenKind::IntConst, String::from(integer), position));
            return;
        }

        self.advance();

        match self.take_run(&DIGITS) {
            Some(fraction) => {
                let lexeme = format!("{}.{}", integer, fraction);
                self.push(MK_TOKEN!(TokenKind::RealConst, lexeme, position));
            }
            None => self.error(LexErrorKind::MalformedFloat, self.position()),
        }
    }

    fn scan_char(&mut self) {
        let position = self.position();
        self.advance(); // opening '

        let body = match self.current() {
            None | Some('\n') => {
                self.error(LexErrorKind::MalformedCharConstant, position);
                return;
            }
            Some('\\') => {
                self.advance();
                match self.current() {
                    None | Some('\n') => {
                        self.error(LexErrorKind::IncompleteEscape, self.position());
                        return;
                    }
                    Some(escaped) => {
                        self.advance();
                        format!("\\{}", escaped)
                    }
                }
            }
            Some(c) => {
                self.advance();
                c.to_string()
            }
        };

        // A wrong closing character stays put for the main loop.
        if self.current() != Some('\'') {
            self.error(LexErrorKind::MissingClosingQuote, self.position());
            return;
        }

        self.advance();
        self.push(MK_TOKEN!(TokenKind::CharConst, format!("'{}'", body), position));
    }

    fn scan_line_comment(&mut self) {
        self.advance_n(2);
        while !matches!(self.current(), None | Some('\n')) {
            self.advance();
        }
    }

    fn scan_block_comment(&mut self) {
        let position = self.position();
        self.advance_n(2);

        loop {
            match (self.current(), self.peek(1)) {
                (None, _) => {
                    self.error(LexErrorKind::UnterminatedBlockComment, position);
                    return;
                }
                (Some('*'), Some('/')) => {
                    self.advance_n(2);
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Runs the scan to completion and hands back both output sequences.
    pub fn scan(mut self) -> (Vec<Token>, Vec<LexError>) {
        debug!(target: "scanner::lexer", bytes = self.source.len(), "scan started");

        loop {
            self.skip_whitespace();

            let Some(c) = self.current() else {
                break;
            };

            match c {
                c if is_word_start(c) => self.scan_word(),
                c if is_digit(c) => self.scan_number(),
                '\'' => self.scan_char(),
                '/' => match self.peek(1) {
                    Some('/') => self.scan_line_comment(),
                    Some('*') => self.scan_block_comment(),
                    _ => self.push_symbol(TokenKind::ArithOp, 1),
                },
                '+' | '-' | '*' => self.push_symbol(TokenKind::ArithOp, 1),
                '<' | '>' => match self.peek(1) {
                    Some('=') => self.push_symbol(TokenKind::RelOp, 2),
                    _ => self.push_symbol(TokenKind::RelOp, 1),
                },
                '=' => match self.peek(1) {
                    Some('=') => self.push_symbol(TokenKind::RelOp, 2),
                    _ => self.push_symbol(TokenKind::Assign, 1),
                },
                '!' => match self.peek(1) {
                    Some('=') => self.push_symbol(TokenKind::RelOp, 2),
                    _ => {
                        self.error(LexErrorKind::IsolatedBang, self.position());
                        self.advance();
                    }
                },
                c if MARKERS.contains(&c) => self.push_symbol(TokenKind::Marker, 1),
                c => {
                    self.error(LexErrorKind::InvalidCharacter { ch: c }, self.position());
                    self.advance();
                }
            }
        }

        let position = self.position();
        self.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));

        debug!(
            target: "scanner::lexer",
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "scan finished"
        );

        (self.tokens, self.errors)
    }
}

fn char_matches(regex: &Regex, c: char) -> bool {
    regex.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Decimal digits of any script (`Nd`), the same class `DIGITS` consumes.
fn is_digit(c: char) -> bool {
    char_matches(&DIGIT, c)
}

fn is_word_start(c: char) -> bool {
    c == '_' || char_matches(&LETTER, c)
}

fn is_word_char(c: char) -> bool {
    is_word_start(c) || is_digit(c)
}

/// Space separators and the ASCII control blanks, minus the no-break spaces.
fn is_blank(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{001C}'..='\u{001F}' => true,
        c => char_matches(&SEPARATOR, c),
    }
}

/// Scans `source` into its tokens (always ending in `EOF`) and lexical errors.
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexError>) {
    Scanner::new(source).scan()
}
