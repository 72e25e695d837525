use crate::{
    ast::{ast::StmtWrapper, statements::ExpressionStmt},
    errors::errors::{Error, ErrorImpl},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one expression statement and consumes its separator.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !parser.current_token().is_separator() {
        return Err(Error::new(
            ErrorImpl::ExpectedSeparator { token: parser.current_token().to_string() },
            parser.get_position(),
        ));
    }
    parser.consume();

    Ok(StmtWrapper::new(ExpressionStmt::new(expr)))
}
