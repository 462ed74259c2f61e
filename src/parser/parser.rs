//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! Statements are dispatched on their leading token through a lookup table;
//! expressions are parsed by precedence climbing over NUD/LED handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for primary expressions
//! - LED (left denotation) handlers for infix operators and calls
//! - Binding powers for operator precedence
//!
//! Syntax errors do not stop the parse. They are collected as diagnostics
//! and the parser skips ahead to the end of the broken statement.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many blocks and expressions may be open at once.
pub const MAX_NESTING: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the diagnostics gathered so far and
/// the lookup tables for statements and expressions.
pub struct Parser {
    /// The tokens to parse; always ends with a single `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Blocks and expressions currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over everything `lexer` produces.
    pub fn new(lexer: Lexer) -> Self {
        Parser::from_tokens(lexer.into_tokens())
    }

    /// Creates a parser over an already lexed token stream. A trailing `EOF`
    /// is added if the stream does not end with one.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|t| t.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span::new(end, end),
            });
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].kind
    }

    /// Advances to the next token and returns the previous token. Never moves
    /// past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Builds the diagnostic for a current token that cannot start what the
    /// caller is parsing.
    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        let error = match token.kind {
            TokenKind::Illegal => ErrorImpl::IllegalToken {
                token: token.value.clone(),
            },
            TokenKind::EOF => ErrorImpl::UnexpectedToken {
                token: TokenKind::EOF.to_string(),
            },
            _ => ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        };

        Error::new(error, token.span.start)
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an Error
    /// naming the expected and the found kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind == expected_kind {
            return Ok(self.advance().clone());
        }

        if token.kind == TokenKind::Illegal {
            return Err(self.unexpected());
        }

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found: token.kind,
            },
            token.span.start,
        ))
    }

    /// Runs `parse` one nesting level deeper, failing at the current token
    /// once `MAX_NESTING` levels are open.
    pub fn nested<R>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<R, Error>,
    ) -> Result<R, Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.current_token().span.start,
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Records a diagnostic.
    pub fn report(&mut self, error: Error) {
        debug!("syntax error: {}", error);
        self.errors.push(error);
    }

    /// The diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Skips to the end of the statement the parser is in.
    ///
    /// Stops after a `;` or after a balanced `{ ... }` group (and any `else`
    /// group following it), or in front of a `}` that closes an enclosing
    /// block, or at `EOF`.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly if depth == 0 => return,
                TokenKind::CloseCurly => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        if self.current_token_kind() != TokenKind::Else {
                            return;
                        }
                        continue;
                    }
                }
                _ => {}
            }

            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses every remaining statement.
    ///
    /// # Returns
    ///
    /// The program together with every diagnostic recorded. The list is empty
    /// if and only if the whole input parsed cleanly.
    pub fn parse_program(&mut self) -> (Program, Vec<Error>) {
        let start = self.current_token().span.start;
        let mut statements = vec![];

        while self.has_tokens() {
            let before = self.pos;

            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.report(error);
                    self.synchronize();

                    // A stray `}` at top level
                    if self.pos == before {
                        self.advance();
                    }
                }
            }
        }

        debug!(
            "parsed {} statements with {} diagnostics",
            statements.len(),
            self.errors.len()
        );

        let program = Program {
            statements,
            span: Span::new(start, self.current_token().span.end),
        };

        (program, std::mem::take(&mut self.errors))
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing: it lexes `source`, builds a
/// parser and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The best-effort program (statements that failed to parse are left out)
/// - Every diagnostic recorded, in source order
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    Parser::new(Lexer::new(source)).parse_program()
}
