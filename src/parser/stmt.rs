use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::IdentifierExpr,
        statements::{
            AssignStmt, BlockStmt, ExpressionStmt, FunctionStmt, IfStmt, LetStmt, Parameter,
            ReturnStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// An expression with an optional trailing `;`.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    let mut span = *expression.span();
    if parser.current_token_kind() == TokenKind::Semicolon {
        span.end = parser.advance().span.end;
    }

    Ok(Stmt::Expression(ExpressionStmt { expression, span }))
}

/// A leading identifier is an assignment when `=` follows it, otherwise the
/// start of an expression.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_token_kind() == TokenKind::Assignment {
        parse_assign_stmt(parser)
    } else {
        parse_expression_stmt(parser)
    }
}

fn identifier(token: Token) -> IdentifierExpr {
    IdentifierExpr {
        value: token.value,
        span: token.span,
    }
}

/// A type annotation. Names are not checked against known types, so any
/// identifier is accepted next to the builtin `int` and `float`.
fn parse_type_name(parser: &mut Parser) -> Result<String, Error> {
    match parser.current_token_kind() {
        TokenKind::Type | TokenKind::Identifier => Ok(parser.advance().value.clone()),
        _ => parser.expect(TokenKind::Type).map(|token| token.value),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let name = identifier(parser.expect(TokenKind::Identifier)?);

    let declared_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type_name(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Let(LetStmt {
        name,
        value,
        declared_type,
        span: Span::new(start, end),
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = identifier(parser.expect(TokenKind::Identifier)?);

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Assign(AssignStmt {
        span: Span::new(target.span.start, end),
        target,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span::new(start, end),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    let end = alternative
        .as_ref()
        .unwrap_or(&consequence)
        .span
        .end;

    Ok(Stmt::If(IfStmt {
        condition,
        consequence,
        alternative,
        span: Span::new(start, end),
    }))
}

/// `{ statement* }`
///
/// A statement that fails to parse is reported and skipped; the rest of the
/// block is still parsed.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.report(error);
                parser.synchronize();
            }
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        statements,
        span: Span::new(start, end),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_function_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let name = identifier(parser.expect(TokenKind::Identifier)?);

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters: Vec<Parameter> = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let token = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Colon)?;
            let declared_type = parse_type_name(parser)?;

            if parameters.iter().any(|p| p.name == token.value) {
                parser.report(Error::new(
                    ErrorImpl::DuplicateParameter { name: token.value },
                    token.span.start,
                ));
            } else {
                parameters.push(Parameter {
                    name: token.value,
                    declared_type: Some(declared_type),
                    span: token.span,
                });
            }

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(parse_type_name(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::Function(FunctionStmt {
        span: Span::new(start, body.span.end),
        name,
        parameters,
        body,
        return_type,
    }))
}
