use std::fmt::Display;

use super::expressions::Expr;

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Grouping,
    Unary,
    Binary,
    Ternary,
}

/// Left-hand side of a binary expression.
///
/// `Missing` only appears in trees recovered from a "Missing left operand."
/// error, so anything walking the tree has to handle it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Present(Box<Expr>),
    Missing,
}

impl Operand {
    pub fn is_missing(&self) -> bool {
        matches!(self, Operand::Missing)
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Operand::Present(expr) => Some(expr),
            Operand::Missing => None,
        }
    }
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Operand::Present(Box::new(expr))
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Present(expr) => write!(f, "{}", expr),
            Operand::Missing => write!(f, "<missing>"),
        }
    }
}
