//! Parser module for building an expression tree.
//!
//! This module contains the recursive-descent parser that turns a token
//! sequence into a single `Expr`. Each precedence level is one function,
//! delegating to the next-tighter level:
//!
//! `comma > ternary > equality > comparison > term > factor > unary > primary`
//!
//! Errors come in two tiers. A binary operator with nothing on its left is
//! reported and recovered from in place, leaving an `Operand::Missing` in the
//! tree. A missing expression or closing `)` is reported and unwinds the whole
//! parse as a `ParseError`.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
