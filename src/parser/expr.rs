use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{BooleanExpr, CallExpr, FloatExpr, IdentifierExpr, InfixExpr, IntegerExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing: parse a primary, then keep folding operators that
/// bind tighter than `bp` into the left operand.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected());
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current level, fold it into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let Some(next_bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            break;
        };

        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Int => {
            let value = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            })?;
            Expr::Integer(IntegerExpr { value, span: token.span })
        }
        TokenKind::Float => {
            let value = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            })?;
            Expr::Float(FloatExpr { value, span: token.span })
        }
        TokenKind::Identifier => Expr::Identifier(IdentifierExpr {
            value: token.value,
            span: token.span,
        }),
        TokenKind::True | TokenKind::False => Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        }),
        _ => return Err(parser.unexpected()),
    };

    parser.advance();
    Ok(expr)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: left.span().to(right.span()),
        left: Box::new(left),
        operator: operator_token.value,
        right: Box::new(right),
    }))
}

/// Like `parse_binary_expr`, but an operator of the same level on the right
/// nests into the right operand: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
pub fn parse_right_assoc_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    parse_binary_expr(parser, left, bp.weaker())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span::new(left.span().start, close.span.end),
        callee: Box::new(left),
        arguments,
    }))
}
