//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! sequence of classified tokens and a list of lexical errors. It handles:
//!
//! - Recognition of reserved words, identifiers and numeric/character constants
//! - Arithmetic, relational and assignment operators, and markers
//! - Line and block comments and whitespace skipping
//! - Line/column tracking for every token and error

pub mod lexer;
pub mod tokens;
