use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{AssignExpr, BinaryExpr, GroupingExpr, LiteralExpr, LiteralValue, NameExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, bp);
    parser.exit_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token = parser.consume();
    let nud_fn = match parser.get_nud_lookup().get(&token.kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.to_string() },
                parser.position_of(&token),
            ))
        }
    };

    let mut left = nud_fn(parser, token)?;

    // While the next token is an infix operator binding tighter than bp, keep extending lhs
    while let Some(led_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if led_bp <= bp {
            break;
        }

        let operator = parser.consume();
        let led_fn = match parser.get_led_lookup().get(&operator.kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        left = led_fn(parser, left, operator, led_bp)?;
    }

    Ok(left)
}

pub fn parse_name_expr(parser: &mut Parser, token: Token) -> Result<ExprWrapper, Error> {
    let name = match token.text() {
        Some(name) => name.to_string(),
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.to_string() },
                parser.position_of(&token),
            ))
        }
    };

    Ok(ExprWrapper::new(NameExpr { token, name }))
}

pub fn parse_literal_expr(parser: &mut Parser, token: Token) -> Result<ExprWrapper, Error> {
    let value = match (&token.kind, &token.value) {
        (TokenKind::String, TokenValue::Text(value)) => LiteralValue::String(value.clone()),
        (TokenKind::Int, TokenValue::Int(value)) => LiteralValue::Int(*value),
        (TokenKind::Float, TokenValue::Float(value)) => LiteralValue::Float(*value),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.to_string() },
                parser.position_of(&token),
            ))
        }
    };

    Ok(ExprWrapper::new(LiteralExpr { value, line: token.line }))
}

pub fn parse_prefix_expr(parser: &mut Parser, operator: Token) -> Result<ExprWrapper, Error> {
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(UnaryExpr { operator, right }))
}

pub fn parse_grouping_expr(parser: &mut Parser, open: Token) -> Result<ExprWrapper, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    let close = parser.consume();

    match close.kind {
        TokenKind::CloseParen => Ok(ExprWrapper::new(GroupingExpr {
            expression,
            line: open.line,
        })),
        TokenKind::EOF => Err(Error::new(ErrorImpl::UnterminatedGrouping, parser.position_of(&close))),
        _ => Err(Error::new(
            ErrorImpl::ExpectedCloseParen { token: close.to_string() },
            parser.position_of(&close),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    operator: Token,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr { left, operator, right }))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    operator: Token,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let target = match left.downcast_ref::<NameExpr>() {
        Some(name) => name.clone(),
        None => return Err(Error::new(ErrorImpl::InvalidAssignmentTarget, parser.position_of(&operator))),
    };

    let value = parse_expr(parser, bp.lower())?;

    Ok(ExprWrapper::new(AssignExpr { target, value }))
}
