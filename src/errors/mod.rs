//! Lexical error types.
//!
//! This module defines the errors the scanner records while tokenizing.
//! It includes:
//!
//! - The error classes a malformed construct can produce
//! - Error structures with line/column information
//! - Suggestions shown alongside rendered errors

pub mod errors;
