use crate::ast::*;

use super::context::Context;
use super::error::ParseError;

use crate::token::{Token, TokenType};

pub fn parse(items: &[Token]) -> Result<Expression, ParseError> {
    let mut state = Context::new(items);
    let expr = parse_addition(&mut state)?;
    let li = state.get_curr()?;
    if li.kind != TokenType::Eof {
        return Err(ParseError::Unfinished(li.kind, li.span));
    }
    Ok(expr)
}

fn parse_addition(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[TokenType::Minus, TokenType::Plus],
        parse_multiplication,
    )
}

fn parse_multiplication(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenType::Star, TokenType::Slash], parse_primary)
}

fn parse_recursive_binary<F>(
    state: &mut Context,
    match_tokens: &'static [TokenType],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while let Some(op_li) = state.match_any(match_tokens) {
        let op = BinaryOp::try_from(op_li.kind)
            .map_err(|kind| ParseError::UnexpectedToken(kind, op_li.span))?;
        let rhs = lower_fn(state)?;
        lhs = Expression::binary(lhs, op, rhs);
    }

    Ok(lhs)
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    if let Some(li) = state.match_any(&[TokenType::Number]) {
        return li
            .literal
            .map(Expression::Literal)
            .ok_or(ParseError::ParseToNumber(li.span));
    }

    if let Some(open) = state.match_any(&[TokenType::LeftParen]) {
        return parse_group(state, open);
    }

    let li = state.get_curr()?;
    Err(ParseError::UnexpectedToken(li.kind, li.span))
}

fn parse_group<'a>(state: &mut Context<'a>, open: Token<'a>) -> Result<Expression, ParseError> {
    state.enter_group(open)?;
    let expr = parse_addition(state)?;
    state.leave_group();

    // now the current token must be ')'
    let li = state.get_curr()?;
    if li.kind != TokenType::RightParen {
        return Err(ParseError::MissingClosingParen(open.span, li.kind, li.span));
    }

    state.advance();
    Ok(expr)
}
