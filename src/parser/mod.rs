//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Expressions are parsed by precedence
//! climbing over NUD (null denotation) and LED (left denotation) handlers,
//! statements by recursive descent dispatched on their leading token.
//!
//! - Statement parsing (let, func, return, if, assignment, blocks)
//! - Expression parsing (binary ops, function calls, literals)
//! - Error recovery: diagnostics are collected and parsing continues at the
//!   next statement boundary

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
