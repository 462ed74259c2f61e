//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - One-token-per-call reading with a restartable end of input
//! - Recognition of keywords, type names, identifiers, literals, and operators
//! - Two-character operators through a non-consuming peek
//! - Token position tracking (line and column) for error reporting
//! - Malformed input, which becomes `Illegal` tokens instead of failures

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
