use crate::{
    ast::expressions::Expr,
    errors::errors::ErrorImpl,
    lexer::tokens::{LiteralValue, Token, TokenKind},
};

use super::{
    lookups::{BinaryLevel, COMMA, COMPARISON, EQUALITY, FACTOR, TERM, UNARY_OPERATORS},
    parser::{ParseResult, Parser},
};

pub fn parse_comma(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_level(parser, &COMMA)
}

pub fn parse_expression(parser: &mut Parser) -> ParseResult<Expr> {
    parse_ternary(parser)
}

/// `condition ? then : else`, right-associative in both branches.
pub fn parse_ternary(parser: &mut Parser) -> ParseResult<Expr> {
    let condition = parse_equality(parser)?;

    if !parser.advance_if_any(&[TokenKind::Question]) {
        return Ok(condition);
    }

    let question = parser.previous_token().clone();
    let then_branch = parse_ternary(parser)?;

    // A missing ':' is not reported; the slot then holds the last consumed token
    parser.advance_if_any(&[TokenKind::Colon]);
    let colon = parser.previous_token().clone();

    let else_branch = parse_ternary(parser)?;

    Ok(Expr::ternary(condition, question, then_branch, colon, else_branch))
}

pub fn parse_equality(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_level(parser, &EQUALITY)
}

pub fn parse_comparison(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_level(parser, &COMPARISON)
}

pub fn parse_term(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_level(parser, &TERM)
}

pub fn parse_factor(parser: &mut Parser) -> ParseResult<Expr> {
    parse_binary_level(parser, &FACTOR)
}

/// Folds `operand (op operand)*` into left-nested binary nodes.
///
/// If the level recovers missing left operands and the current token is
/// already one of its operators, that is reported once and the first node
/// gets `Operand::Missing` on its left.
fn parse_binary_level(parser: &mut Parser, level: &BinaryLevel) -> ParseResult<Expr> {
    log::trace!("{:?} at token {}", level.precedence, parser.position());

    let mut expr = if level.recovers_missing_left && parser.check_any(level.operators) {
        let token = parser.current_token();
        parser.report(token, &ErrorImpl::MissingLeftOperand);

        let operator = parser.advance().clone();
        let right = (level.right_operand)(parser)?;
        Expr::binary_missing_left(operator, right)
    } else {
        (level.operand)(parser)?
    };

    while parser.advance_if_any(level.operators) {
        let operator = parser.previous_token().clone();
        let right = (level.right_operand)(parser)?;
        expr = Expr::binary(expr, operator, right);
    }

    Ok(expr)
}

pub fn parse_unary(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.advance_if_any(&UNARY_OPERATORS) {
        let operator = parser.previous_token().clone();
        let right = parse_unary(parser)?;
        return Ok(Expr::unary(operator, right));
    }

    parse_primary(parser)
}

pub fn parse_primary(parser: &mut Parser) -> ParseResult<Expr> {
    match parser.current_token_kind() {
        TokenKind::False => {
            parser.advance();
            Ok(Expr::literal(LiteralValue::Bool(false)))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expr::literal(LiteralValue::Bool(true)))
        }
        TokenKind::Nil => {
            parser.advance();
            Ok(Expr::literal(LiteralValue::Nil))
        }
        TokenKind::Number | TokenKind::String => {
            let token = parser.advance();
            match literal_of(token) {
                Some(value) => Ok(Expr::literal(value)),
                None => Err(parser.error(token, ErrorImpl::ExpectExpression)),
            }
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen, ErrorImpl::ExpectClosingParen)?;
            Ok(Expr::grouping(expr))
        }
        _ => {
            let token = parser.current_token();
            Err(parser.error(token, ErrorImpl::ExpectExpression))
        }
    }
}

// Tokens built by hand may leave `literal` empty; fall back to the lexeme
fn literal_of(token: &Token) -> Option<LiteralValue> {
    if let Some(literal) = &token.literal {
        return Some(literal.clone());
    }

    match token.kind {
        TokenKind::Number => token.value.parse().ok().map(LiteralValue::Number),
        TokenKind::String => token
            .value
            .strip_prefix('"')
            .and_then(|value| value.strip_suffix('"'))
            .map(|value| LiteralValue::String(value.to_string())),
        _ => None,
    }
}
