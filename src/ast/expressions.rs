use std::{any::Any, fmt::Display};

use crate::lexer::tokens::Token;

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Value of a literal expression, one case per literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Int(i64),
    Float(f64),
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::String(value) => write!(f, "\"{}\"", value),
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

/// Literal Expression
/// Represents a string, integer or float literal in the AST.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub line: u32,
}

impl Expr for LiteralExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Literal
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_line(&self) -> u32 {
        self.line
    }
}

impl Display for LiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Name Expression
/// Represents a reference to an identifier in the AST.
#[derive(Debug, Clone)]
pub struct NameExpr {
    pub token: Token,
    pub name: String,
}

impl Expr for NameExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Name
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_line(&self) -> u32 {
        self.token.line
    }
}

impl Display for NameExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// COMPLEX

/// Unary Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: ExprWrapper,
}

impl Expr for UnaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Unary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(UnaryExpr {
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
        })
    }
    fn get_line(&self) -> u32 {
        self.operator.line
    }
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.operator, self.right)
    }
}

/// Grouping Expression
/// Represents a parenthesised expression in the AST.
#[derive(Debug)]
pub struct GroupingExpr {
    pub expression: ExprWrapper,
    pub line: u32,
}

impl Expr for GroupingExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Grouping
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(GroupingExpr {
            expression: self.expression.clone_wrapper(),
            line: self.line,
        })
    }
    fn get_line(&self) -> u32 {
        self.line
    }
}

impl Display for GroupingExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(group {})", self.expression)
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
        })
    }
    fn get_line(&self) -> u32 {
        self.left.get_line()
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.operator, self.left, self.right)
    }
}

/// Assignment Expression
/// Represents binding a value to a name in the AST.
#[derive(Debug)]
pub struct AssignExpr {
    pub target: NameExpr,
    pub value: ExprWrapper,
}

impl Expr for AssignExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assign
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(AssignExpr {
            target: self.target.clone(),
            value: self.value.clone_wrapper(),
        })
    }
    fn get_line(&self) -> u32 {
        self.target.get_line()
    }
}

impl Display for AssignExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(= {} {})", self.target, self.value)
    }
}
