use crate::{ast::expressions::Expr, lexer::tokens::TokenKind};

use super::{
    expr::{parse_comparison, parse_expression, parse_factor, parse_term, parse_unary},
    parser::{ParseResult, Parser},
};

/// Grammar levels, loosest to tightest.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Comma,
    Ternary,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Primary,
}

pub type LevelHandler = fn(&mut Parser) -> ParseResult<Expr>;

pub const COMMA_OPERATORS: [TokenKind; 1] = [TokenKind::Comma];
pub const EQUALITY_OPERATORS: [TokenKind; 2] = [TokenKind::NotEquals, TokenKind::Equals];
pub const COMPARISON_OPERATORS: [TokenKind; 4] = [
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Less,
    TokenKind::LessEquals,
];
pub const TERM_OPERATORS: [TokenKind; 2] = [TokenKind::Minus, TokenKind::Plus];
pub const FACTOR_OPERATORS: [TokenKind; 2] = [TokenKind::Slash, TokenKind::Star];
pub const UNARY_OPERATORS: [TokenKind; 2] = [TokenKind::Not, TokenKind::Minus];

/// Tokens that begin a statement; `synchronize` stops in front of them.
pub const STATEMENT_STARTERS: [TokenKind; 8] = [
    TokenKind::Class,
    TokenKind::Fun,
    TokenKind::Var,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Print,
    TokenKind::Return,
];

/// A left-associative binary level of the ladder.
pub struct BinaryLevel {
    pub precedence: Precedence,
    pub operators: &'static [TokenKind],
    /// Parses the first (leftmost) operand.
    pub operand: LevelHandler,
    /// Parses each operand to the right of an operator.
    pub right_operand: LevelHandler,
    /// Whether a leading operator is reported as "Missing left operand." and
    /// recovered from instead of falling through to `operand`.
    pub recovers_missing_left: bool,
}

pub const COMMA: BinaryLevel = BinaryLevel {
    precedence: Precedence::Comma,
    operators: &COMMA_OPERATORS,
    operand: parse_expression,
    right_operand: parse_expression,
    recovers_missing_left: false,
};

pub const EQUALITY: BinaryLevel = BinaryLevel {
    precedence: Precedence::Equality,
    operators: &EQUALITY_OPERATORS,
    operand: parse_comparison,
    right_operand: parse_comparison,
    recovers_missing_left: true,
};

pub const COMPARISON: BinaryLevel = BinaryLevel {
    precedence: Precedence::Comparison,
    operators: &COMPARISON_OPERATORS,
    operand: parse_term,
    right_operand: parse_term,
    recovers_missing_left: true,
};

pub const TERM: BinaryLevel = BinaryLevel {
    precedence: Precedence::Term,
    operators: &TERM_OPERATORS,
    operand: parse_factor,
    right_operand: parse_factor,
    recovers_missing_left: true,
};

// The right operand recurses into factor itself, so `6 / 3 / 2` groups as `6 / (3 / 2)`
pub const FACTOR: BinaryLevel = BinaryLevel {
    precedence: Precedence::Factor,
    operators: &FACTOR_OPERATORS,
    operand: parse_unary,
    right_operand: parse_factor,
    recovers_missing_left: true,
};
