use log::{debug, trace};

use crate::ast::*;
use crate::diagnostic::Diagnostics;
use crate::interpret::Value;
use crate::token::{LexItem, Token};

use super::context::Context;
use super::error::ParseError;

/// Parses one expression from the front of `items`; tokens after it are
/// left unread. Any syntax error is reported to `diagnostics` and the whole
/// parse yields `None`.
pub fn parse(items: &[LexItem], diagnostics: &mut Diagnostics) -> Option<Expression> {
    let Some(mut state) = Context::new(items) else {
        debug!("token slice is not terminated by Eof, nothing to parse");
        return None;
    };

    match parse_expr(&mut state) {
        Ok(expr) => {
            trace!("parsed {:?}", expr);
            Some(expr)
        }
        Err(err) => {
            err.report(diagnostics);
            None
        }
    }
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_equality(state)
}

fn parse_equality(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[Token::BangEqual, Token::EqualEqual],
        parse_comparison,
    )
}

fn parse_comparison(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[
            Token::Greater,
            Token::GreaterEqual,
            Token::Less,
            Token::LessEqual,
        ],
        parse_term,
    )
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[Token::Minus, Token::Plus], parse_factor)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[Token::Slash, Token::Star], parse_unary)
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_tokens: &'static [Token],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while let Some(op) = state.next_if(match_tokens) {
        let rhs = lower_fn(state)?;
        lhs = Expression::BinaryOp(BinaryOpNode {
            lhs: Box::new(lhs),
            op: op.clone(),
            rhs: Box::new(rhs),
        });
    }

    Ok(lhs)
}

fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    match state.next_if(&[Token::Bang, Token::Minus]) {
        Some(op) => Ok(Expression::UnaryOp(UnaryOpNode {
            op: op.clone(),
            operand: Box::new(parse_unary(state)?),
        })),
        None => parse_primary(state),
    }
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr();

    let value = match li.token {
        Token::False => Value::Bool(false),
        Token::True => Value::Bool(true),
        Token::Nil => Value::Nil,
        Token::Number | Token::String => match &li.literal {
            Some(literal) => Value::from(literal.clone()),
            None => return Err(ParseError::ExpectExpression(li.clone())),
        },
        Token::LRoundParen => return parse_group(state),
        _ => return Err(ParseError::ExpectExpression(li.clone())),
    };

    state.advance();
    Ok(Expression::Literal(value))
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    state.advance(); // consume '('
    let expr = parse_expr(state)?;

    if state.next_if(&[Token::RRoundParen]).is_none() {
        return Err(ParseError::ExpectRightParen(state.get_curr().clone()));
    }

    Ok(Expression::Group(Box::new(expr)))
}
