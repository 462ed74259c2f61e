use lazy_static::lazy_static;
use log::{trace, warn};
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"^[\p{Alphabetic}_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9][0-9.]*").unwrap();
}

/// Reads tokens one at a time out of a source string.
///
/// The only state is the cursor: the byte offset of the current character and
/// the line and column it sits on.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the cursor. Never consumes.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column)
    }

    /// Consumes the current character.
    fn read_char(&mut self) {
        if let Some(ch) = self.at() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes `n` bytes that are known not to contain a newline.
    fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.column += self.source[self.pos..end].chars().count() as u32;
        self.pos = end;
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.at() {
            self.read_char();
        }
    }

    /// Builds a token out of everything consumed since `start`.
    fn emit(&self, kind: TokenKind, start: Position) -> Token {
        let token = MK_TOKEN!(
            kind,
            self.source[start.offset as usize..self.pos].to_string(),
            Span::new(start, self.position())
        );
        trace!("{}", token);
        token
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.read_char();
        self.emit(kind, start)
    }

    /// Reads a two-character operator when the next character is `second`,
    /// otherwise the one-character `fallback`.
    fn either(
        &mut self,
        second: char,
        double: TokenKind,
        fallback: TokenKind,
        start: Position,
    ) -> Token {
        if self.peek() == Some(second) {
            self.read_char();
            self.single(double, start)
        } else {
            self.single(fallback, start)
        }
    }

    fn read_word(&mut self, start: Position) -> Token {
        let len = WORD_PATTERN
            .find(self.remainder())
            .map(|m| m.end())
            .unwrap_or_else(|| self.at().map_or(0, char::len_utf8));
        self.advance_n(len);

        let kind = lookup_ident(&self.source[start.offset as usize..self.pos]);
        self.emit(kind, start)
    }

    fn read_number(&mut self, start: Position) -> Token {
        let len = NUMBER_PATTERN
            .find(self.remainder())
            .map(|m| m.end())
            .unwrap_or(0);
        self.advance_n(len);

        let text = &self.source[start.offset as usize..self.pos];
        let kind = match text.matches('.').count() {
            0 if text.parse::<i64>().is_ok() => TokenKind::Int,
            0 => {
                warn!("Integer literal `{}` out of range at {}", text, start);
                TokenKind::Illegal
            }
            1 if text.parse::<f64>().is_ok_and(f64::is_finite) => TokenKind::Float,
            1 => {
                warn!("Float literal `{}` out of range at {}", text, start);
                TokenKind::Illegal
            }
            _ => {
                warn!("Too many decimals in `{}` at {}", text, start);
                TokenKind::Illegal
            }
        };

        self.emit(kind, start)
    }

    /// Reads the next token. Once the input is exhausted every call returns an
    /// `EOF` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position();
        let Some(ch) = self.at() else {
            return self.emit(TokenKind::EOF, start);
        };

        match ch {
            '+' => self.single(TokenKind::Plus, start),
            '-' => self.either('>', TokenKind::Arrow, TokenKind::Minus, start),
            '*' => self.single(TokenKind::Asterisk, start),
            '/' => self.single(TokenKind::Slash, start),
            '^' => self.single(TokenKind::Pow, start),
            '%' => self.single(TokenKind::Modulus, start),
            '<' => self.either('=', TokenKind::LessEquals, TokenKind::Less, start),
            '>' => self.either('=', TokenKind::GreaterEquals, TokenKind::Greater, start),
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assignment, start),
            '!' => {
                if self.peek() != Some('=') {
                    warn!("Unexpected `!` at {}", start);
                }
                self.either('=', TokenKind::NotEquals, TokenKind::Illegal, start)
            }
            ':' => self.single(TokenKind::Colon, start),
            ',' => self.single(TokenKind::Comma, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '(' => self.single(TokenKind::OpenParen, start),
            ')' => self.single(TokenKind::CloseParen, start),
            '{' => self.single(TokenKind::OpenCurly, start),
            '}' => self.single(TokenKind::CloseCurly, start),
            c if c.is_alphabetic() || c == '_' => self.read_word(start),
            c if c.is_ascii_digit() => self.read_number(start),
            c => {
                warn!("Unrecognised character `{}` at {}", c, start);
                self.single(TokenKind::Illegal, start)
            }
        }
    }

    /// Reads the remaining tokens, up to and including the first `EOF`.
    pub fn into_tokens(mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);

            if done {
                break;
            }
        }

        tokens
    }
}

/// Reads every token out of `source`. The result always ends with exactly one
/// `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).into_tokens()
}
