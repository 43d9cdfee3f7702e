use std::fmt::Display;

use crate::lexer::tokens::{LiteralValue, Token};

use super::ast::{ExprType, Operand};

/// Expression node.
///
/// Every node owns its children, so a parsed expression is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `123`, `"text"`, `true`, `nil`
    Literal(LiteralValue),
    /// `( inner )`
    Grouping(Box<Expr>),
    /// `!right` or `-right`
    Unary { operator: Token, right: Box<Expr> },
    /// `left op right`, where `left` may be missing after error recovery
    Binary {
        left: Operand,
        operator: Token,
        right: Box<Expr>,
    },
    /// `condition ? then_branch : else_branch`
    Ternary {
        condition: Box<Expr>,
        question: Token,
        then_branch: Box<Expr>,
        colon: Token,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: impl Into<Operand>, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: left.into(),
            operator,
            right: Box::new(right),
        }
    }

    /// Binary node whose left operand was never written.
    pub fn binary_missing_left(operator: Token, right: Expr) -> Self {
        Expr::binary(Operand::Missing, operator, right)
    }

    pub fn ternary(condition: Expr, question: Token, then_branch: Expr, colon: Token, else_branch: Expr) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            question,
            then_branch: Box::new(then_branch),
            colon,
            else_branch: Box::new(else_branch),
        }
    }

    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Grouping(_) => ExprType::Grouping,
            Expr::Unary { .. } => ExprType::Unary,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Ternary { .. } => ExprType::Ternary,
        }
    }

    /// True if this node or any node below it lost its left operand during
    /// recovery.
    pub fn has_missing_operand(&self) -> bool {
        match self {
            Expr::Literal(_) => false,
            Expr::Grouping(inner) => inner.has_missing_operand(),
            Expr::Unary { right, .. } => right.has_missing_operand(),
            Expr::Binary { left, right, .. } => match left {
                Operand::Missing => true,
                Operand::Present(left) => left.has_missing_operand() || right.has_missing_operand(),
            },
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                condition.has_missing_operand()
                    || then_branch.has_missing_operand()
                    || else_branch.has_missing_operand()
            }
        }
    }
}

impl From<LiteralValue> for Expr {
    fn from(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }
}

// Lisp-style prefix form, e.g. `(+ 1 (* 2 3))`
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Grouping(inner) => write!(f, "(group {})", inner),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.value, right),
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operator.value, left, right)
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
                ..
            } => write!(f, "(?: {} {} {})", condition, then_branch, else_branch),
        }
    }
}
