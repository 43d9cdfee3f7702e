//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into the token sequence the parser consumes. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and byte-offset tracking for diagnostics
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
