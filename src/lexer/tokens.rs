use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("main");
        set.insert("int");
        set.insert("float");
        set.insert("char");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("do");
        set.insert("for");
        set
    };

    pub static ref MARKERS: HashSet<char> = ['(', ')', '{', '}', ',', ';'].into_iter().collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Reserved,
    Identifier,
    IntConst,
    RealConst,
    CharConst,
    ArithOp, // + - * /
    RelOp,   // < <= > >= == !=
    Assign,  // =
    Marker,  // ( ) { } , ;
    EOF,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Reserved => "RESERVED",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntConst => "INT_CONST",
            TokenKind::RealConst => "REAL_CONST",
            TokenKind::CharConst => "CHAR_CONST",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::RelOp => "REL_OP",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Marker => "MARKER",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12} '{}'  (l{}:c{})",
            self.kind.label(),
            self.lexeme,
            self.position.line,
            self.position.column
        )
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
