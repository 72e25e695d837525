use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, errors::errors::Error, lexer::tokens::{Token, TokenKind}};

use super::{expr::*, parser::Parser};

/// Precedence ladder, lowest first. Only `Assignment`, `Sum`, `Product`
/// and `Prefix` are wired; the other levels are reserved.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Conditional,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
    Call,
}

impl BindingPower {
    /// The level directly below this one, used to make an operator right associative.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Conditional => BindingPower::Assignment,
            BindingPower::Sum => BindingPower::Conditional,
            BindingPower::Product => BindingPower::Sum,
            BindingPower::Exponent => BindingPower::Product,
            BindingPower::Prefix => BindingPower::Exponent,
            BindingPower::Postfix => BindingPower::Prefix,
            BindingPower::Call => BindingPower::Postfix,
        }
    }
}

/// Prefix rule, called with the token it was dispatched on (already consumed).
pub type NUDHandler = fn(&mut Parser, Token) -> Result<ExprWrapper, Error>;
/// Infix rule, called with the left operand, the consumed operator and its binding power.
pub type LEDHandler = fn(&mut Parser, ExprWrapper, Token, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Product, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_name_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Int, parse_literal_expr);
    parser.nud(TokenKind::Float, parse_literal_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
