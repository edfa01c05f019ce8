//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
