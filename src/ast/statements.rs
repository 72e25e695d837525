use std::{
    any::Any,
    fmt::Display,
    slice::Iter,
};

use super::ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper};

/// Root of a parsed source unit: its statements in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub body: Vec<StmtWrapper>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
    pub fn len(&self) -> usize {
        self.body.len()
    }
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Expression Statement
/// An expression terminated by a newline, a semicolon or the end of input.
#[derive(Debug)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub line: u32,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStmt {
            expression: self.expression.clone_wrapper(),
            line: self.line,
        })
    }
    fn get_line(&self) -> u32 {
        self.line
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl ExpressionStmt {
    pub fn new(expression: ExprWrapper) -> Self {
        ExpressionStmt {
            line: expression.get_line(),
            expression,
        }
    }
}
