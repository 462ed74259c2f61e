//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names and identifiers
//! - Numeric literals (integers and floats) and malformed numbers
//! - Operators, two-character operators and punctuation
//! - Positions and the end of input
//! - Illegal characters

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let func return if else true false");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Func);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_type_names() {
    let tokens = tokenize("int float");

    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].kind, TokenKind::Type);
    assert_eq!(tokens[1].value, "float");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase letter");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    // Keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("x1");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7.");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].value, "7.");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_too_many_decimals_is_one_illegal_token() {
    let tokens = tokenize("3.14.1");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "3.14.1");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_float_overflow_is_illegal() {
    let text = format!("{}.0", "9".repeat(400));
    let tokens = tokenize(&text);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, text);
}

#[test]
fn test_integer_overflow_is_illegal() {
    let tokens = tokenize("99999999999999999999");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "99999999999999999999");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / ^ % == != < > <= >= ="),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Pow,
            TokenKind::Modulus,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ; : ->"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_without_spaces() {
    let tokens = tokenize("a<=b->c==d");

    assert_eq!(tokens[1].kind, TokenKind::LessEquals);
    assert_eq!(tokens[1].value, "<=");
    assert_eq!(tokens[3].kind, TokenKind::Arrow);
    assert_eq!(tokens[3].value, "->");
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[5].value, "==");
}

#[test]
fn test_peek_does_not_swallow_following_token() {
    // `<` followed by `-` is two tokens, and `=` followed by `>` too
    assert_eq!(
        kinds("<-=>"),
        vec![
            TokenKind::Less,
            TokenKind::Minus,
            TokenKind::Assignment,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lone_bang_is_illegal() {
    let tokens = tokenize("!x");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "!");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_unrecognised_character_is_illegal() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x: int = 42;");

    assert_eq!(tokens.len(), 8); // let, x, :, int, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Colon);
    assert_eq!(tokens[3].kind, TokenKind::Type);
    assert_eq!(tokens[4].kind, TokenKind::Assignment);
    assert_eq!(tokens[5].kind, TokenKind::Int);
    assert_eq!(tokens[5].value, "42");
    assert_eq!(tokens[6].kind, TokenKind::Semicolon);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("func add(a: int, b: int) -> int { return a + b; }");

    assert_eq!(tokens[0].kind, TokenKind::Func);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "a");
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[5].kind, TokenKind::Type);
    assert_eq!(tokens[10].kind, TokenKind::CloseParen);
    assert_eq!(tokens[11].kind, TokenKind::Arrow);
}

#[test]
fn test_arithmetic_expression_kinds() {
    assert_eq!(
        kinds("a + b * 2"),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Asterisk,
            TokenKind::Int,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_is_deterministic_across_splits() {
    let source = "let x1 = a<=b * 2.5; f(y)!=z";
    let tokens = tokenize(source);
    let whole = kinds(source);

    for split in 0..=source.len() {
        let inside_token = tokens
            .iter()
            .any(|t| (t.span.start.offset as usize) < split && split < t.span.end.offset as usize);
        if inside_token {
            continue;
        }

        let (prefix, suffix) = source.split_at(split);
        let mut joined = kinds(prefix);
        assert_eq!(joined.pop(), Some(TokenKind::EOF));
        joined.extend(kinds(suffix));

        assert_eq!(joined, whole, "split at {}", split);
    }
}

#[test]
fn test_fresh_lexers_agree() {
    let source = "func f(a: int) -> int { return a ^ 2; }\nlet b = f(3.5) >= 1;";

    assert_eq!(Lexer::new(source).into_tokens(), Lexer::new(source).into_tokens());
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_round_trip_of_significant_characters() {
    let sources = [
        "let x: int = 5;",
        "func f(a: int) -> float {\n\treturn a ^ 2.5;\r\n}",
        "if (x <= 3.14.1) { y = !z; } else { @ }",
        "  ",
        "",
    ];

    for source in sources {
        let joined: String = tokenize(source).iter().map(|t| t.value.as_str()).collect();
        let significant: String = source
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect();
        assert_eq!(joined, significant, "source: {:?}", source);
    }
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("let x = 1;\n  y = 22;");

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);

    // `y` on the second line, after two spaces
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[5].span.start.line, 2);
    assert_eq!(tokens[5].span.start.column, 3);
    assert_eq!(tokens[5].span.start.offset, 13);

    assert_eq!(tokens[7].value, "22");
    assert_eq!(tokens[7].span.end.column, 9);
}

#[test]
fn test_eof_repeats_forever() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert!(lexer.at_eof());
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
        assert_eq!(token.span.start.offset, 1);
    }
}

#[test]
fn test_whitespace_handling() {
    let tokens = tokenize("  let \t  x \r\n =   42  ");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].span.start.line, 2);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_peek_is_non_consuming() {
    let lexer = Lexer::new("->");

    assert_eq!(lexer.at(), Some('-'));
    assert_eq!(lexer.peek(), Some('>'));
    assert_eq!(lexer.peek(), Some('>'));
    assert_eq!(lexer.at(), Some('-'));
}

#[test]
fn test_column_far_into_long_line() {
    let source = "a+".repeat(50_000);
    let tokens = tokenize(&source);

    assert_eq!(tokens.len(), 100_001);
    let last = &tokens[99_999];
    assert_eq!(last.kind, TokenKind::Plus);
    assert_eq!(last.span.start.line, 1);
    assert_eq!(last.span.start.column, 100_000);
    assert_eq!(last.span.end.column, 100_001);

    let eof = &tokens[100_000];
    assert_eq!(eof.span.start.column, 100_001);
}

#[test]
fn test_column_resets_after_newline() {
    let tokens = tokenize("let é = 1;\n  x");

    // columns count characters, not bytes
    assert_eq!(tokens[2].span.start.column, 7);
    assert_eq!(tokens[5].span.start.line, 2);
    assert_eq!(tokens[5].span.start.column, 3);
}
