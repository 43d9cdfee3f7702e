//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Precedence and associativity of every level
//! - Grouping and ternary nesting
//! - Missing-left-operand recovery
//! - Unrecoverable failures and their diagnostics
//! - Cursor bounds and statement-boundary synchronization

use pretty_assertions::assert_eq;

use super::parser::{parse, Parser};
use crate::{
    ast::{ast::Operand, expressions::Expr},
    errors::errors::DiagnosticCollector,
    lexer::{
        lexer::tokenize,
        tokens::{LiteralValue, Token, TokenKind},
    },
    Position, Span,
};

fn parse_source(source: &str) -> (Option<Expr>, DiagnosticCollector) {
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();
    let mut collector = DiagnosticCollector::new();
    let expr = parse(&tokens, &mut collector);
    (expr, collector)
}

fn printed(source: &str) -> String {
    let (expr, collector) = parse_source(source);
    assert!(!collector.had_error(), "unexpected diagnostics: {:?}", collector.messages());
    expr.unwrap().to_string()
}

fn token(kind: TokenKind, value: &str, literal: Option<LiteralValue>) -> Token {
    Token {
        kind,
        value: value.to_string(),
        literal,
        line: 1,
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

fn eof() -> Token {
    token(TokenKind::EOF, "", None)
}

#[test]
fn test_parse_precedence_ladder() {
    let tokens = tokenize("1 + 2 * 3", None).unwrap();
    let mut collector = DiagnosticCollector::new();

    let expr = parse(&tokens, &mut collector);

    let expected = Expr::binary(
        Expr::literal(LiteralValue::Number(1.0)),
        tokens[1].clone(),
        Expr::binary(
            Expr::literal(LiteralValue::Number(2.0)),
            tokens[3].clone(),
            Expr::literal(LiteralValue::Number(3.0)),
        ),
    );
    assert!(!collector.had_error());
    assert_eq!(expr, Some(expected));
}

#[test]
fn test_parse_levels() {
    assert_eq!(printed("1 == 2 != 3"), "(!= (== 1 2) 3)");
    assert_eq!(printed("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
    assert_eq!(printed("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(printed("1 + 2 > 3 * 4"), "(> (+ 1 2) (* 3 4))");
    assert_eq!(printed("1 - -3"), "(- 1 (- 3))");
    assert_eq!(printed("!true == false"), "(== (! true) false)");
    assert_eq!(printed("!!true"), "(! (! true))");
}

#[test]
fn test_parse_factor_groups_to_the_right() {
    assert_eq!(printed("6 / 3 / 2"), "(/ 6 (/ 3 2))");
    assert_eq!(printed("2 * 3 / 4"), "(* 2 (/ 3 4))");
    assert_eq!(printed("1 + 6 / 3 / 2"), "(+ 1 (/ 6 (/ 3 2)))");

    let (expr, _) = parse_source("6 / 3 / 2");
    match expr.unwrap() {
        Expr::Binary { left, right, .. } => {
            assert_eq!(left, Operand::from(Expr::literal(LiteralValue::Number(6.0))));
            assert!(matches!(*right, Expr::Binary { .. }));
        }
        other => panic!("expected binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_literals() {
    let (expr, _) = parse_source("\"hi\"");
    assert_eq!(expr, Some(Expr::literal(LiteralValue::String("hi".to_string()))));

    let (expr, _) = parse_source("nil");
    assert_eq!(expr, Some(Expr::literal(LiteralValue::Nil)));

    let (expr, _) = parse_source("true");
    assert_eq!(expr, Some(Expr::literal(LiteralValue::Bool(true))));

    let (expr, _) = parse_source("12.5");
    assert_eq!(expr, Some(Expr::literal(LiteralValue::Number(12.5))));
}

#[test]
fn test_parse_literal_without_payload() {
    let tokens = vec![token(TokenKind::Number, "42", None), eof()];
    let mut collector = DiagnosticCollector::new();

    let expr = parse(&tokens, &mut collector);

    assert_eq!(expr, Some(Expr::literal(LiteralValue::Number(42.0))));
    assert!(!collector.had_error());
}

#[test]
fn test_parse_grouping() {
    assert_eq!(printed("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
    assert_eq!(printed("((1))"), "(group (group 1))");

    for inner in ["1", "1 + 2", "!true", "1 ? 2 : 3", "6 / 3 / 2"] {
        let (grouped, _) = parse_source(&format!("( {} )", inner));
        let (bare, _) = parse_source(inner);

        let grouped = grouped.unwrap();
        assert!(matches!(grouped, Expr::Grouping(_)));
        assert_eq!(grouped.to_string(), Expr::grouping(bare.unwrap()).to_string());
    }
}

#[test]
fn test_parse_ternary_nesting() {
    assert_eq!(printed("true ? 1 : false ? 2 : 3"), "(?: true 1 (?: false 2 3))");
    assert_eq!(printed("true ? false ? 1 : 2 : 3"), "(?: true (?: false 1 2) 3)");
    assert_eq!(printed("1 == 2 ? 3 : 4"), "(?: (== 1 2) 3 4)");

    let (expr, _) = parse_source("true ? 1 : 2");
    match expr.unwrap() {
        Expr::Ternary { question, colon, .. } => {
            assert_eq!(question.kind, TokenKind::Question);
            assert_eq!(colon.kind, TokenKind::Colon);
        }
        other => panic!("expected ternary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_ternary_without_colon() {
    let (expr, collector) = parse_source("true ? 1 2");

    assert!(!collector.had_error());
    match expr.unwrap() {
        Expr::Ternary { colon, else_branch, .. } => {
            assert_eq!(colon.kind, TokenKind::Number);
            assert_eq!(colon.value, "1");
            assert_eq!(*else_branch, Expr::literal(LiteralValue::Number(2.0)));
        }
        other => panic!("expected ternary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_comma() {
    assert_eq!(printed("1, 2, 3"), "(, (, 1 2) 3)");
    assert_eq!(printed("true ? 1 : 2, 3"), "(, (?: true 1 2) 3)");
}

#[test]
fn test_parse_missing_left_operand() {
    let tokens = vec![
        token(TokenKind::Equals, "==", None),
        token(TokenKind::Number, "3", Some(LiteralValue::Number(3.0))),
        eof(),
    ];
    let mut collector = DiagnosticCollector::new();

    let expr = parse(&tokens, &mut collector);

    assert_eq!(collector.messages(), vec!["Missing left operand."]);
    assert_eq!(collector.diagnostics()[0].token.kind, TokenKind::Equals);
    match expr.unwrap() {
        Expr::Binary { left, operator, right } => {
            assert_eq!(left, Operand::Missing);
            assert_eq!(operator.kind, TokenKind::Equals);
            assert_eq!(*right, Expr::literal(LiteralValue::Number(3.0)));
        }
        other => panic!("expected binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_left_operand_each_level() {
    for (source, expected) in [
        ("!= 1", "(!= <missing> 1)"),
        ("> 1", "(> <missing> 1)"),
        ("<= 1 + 2", "(<= <missing> (+ 1 2))"),
        ("+ 2", "(+ <missing> 2)"),
        ("* 2", "(* <missing> 2)"),
        ("/ 6 / 2", "(/ <missing> (/ 6 2))"),
        ("== 1 == 2", "(== (== <missing> 1) 2)"),
    ] {
        let (expr, collector) = parse_source(source);
        assert_eq!(collector.messages(), vec!["Missing left operand."], "{}", source);

        let expr = expr.unwrap();
        assert!(expr.has_missing_operand());
        assert_eq!(expr.to_string(), expected);
    }
}

#[test]
fn test_parse_leading_minus_is_missing_left_operand() {
    let (expr, collector) = parse_source("-3");
    assert_eq!(collector.messages(), vec!["Missing left operand."]);
    assert_eq!(expr.unwrap().to_string(), "(- <missing> 3)");

    assert_eq!(printed("2 * -3"), "(* 2 (- 3))");
}

#[test]
fn test_parse_missing_left_operand_inside_grouping() {
    let (expr, collector) = parse_source("1 + (* 2)");

    assert_eq!(collector.messages(), vec!["Missing left operand."]);
    assert_eq!(expr.unwrap().to_string(), "(+ 1 (group (* <missing> 2)))");
}

#[test]
fn test_parse_empty_input() {
    let tokens = vec![eof()];
    let mut collector = DiagnosticCollector::new();

    let expr = parse(&tokens, &mut collector);

    assert_eq!(expr, None);
    assert_eq!(collector.messages(), vec!["Expect expression."]);
    assert_eq!(
        collector.diagnostics()[0].to_string(),
        "[line 1] Error at end: Expect expression."
    );
}

#[test]
fn test_parse_unterminated_grouping() {
    let (expr, collector) = parse_source("( 1");

    assert_eq!(expr, None);
    assert_eq!(collector.messages(), vec!["Expect ')' after expression."]);
}

#[test]
fn test_parse_grouping_rejects_comma() {
    let (expr, collector) = parse_source("(1, 2)");

    assert_eq!(expr, None);
    assert_eq!(collector.messages(), vec!["Expect ')' after expression."]);
    assert_eq!(
        collector.diagnostics()[0].to_string(),
        "[line 1] Error at ',': Expect ')' after expression."
    );
}

#[test]
fn test_parse_unexpected_token() {
    let (expr, collector) = parse_source("1 + )");

    assert_eq!(expr, None);
    assert_eq!(collector.messages(), vec!["Expect expression."]);
    assert_eq!(collector.diagnostics()[0].token.kind, TokenKind::CloseParen);
}

#[test]
fn test_parse_recovered_then_failed() {
    let (expr, collector) = parse_source("== (1");

    assert_eq!(expr, None);
    assert_eq!(
        collector.messages(),
        vec!["Missing left operand.", "Expect ')' after expression."]
    );
}

#[test]
fn test_parse_never_passes_eof() {
    for source in ["", "(", "((", "1 +", "1 ?", "1 ? 2 :", "==", "-", "!", "(1", "1 2"] {
        let tokens = tokenize(source, None).unwrap();
        let mut collector = DiagnosticCollector::new();
        let mut parser = Parser::new(&tokens, &mut collector);

        parser.parse();

        assert!(parser.position() < tokens.len(), "{}", source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    }
}

#[test]
fn test_parse_leaves_trailing_tokens() {
    let tokens = tokenize("1 2", None).unwrap();
    let mut collector = DiagnosticCollector::new();
    let mut parser = Parser::new(&tokens, &mut collector);

    let expr = parser.parse();

    assert_eq!(expr, Some(Expr::literal(LiteralValue::Number(1.0))));
    assert_eq!(parser.position(), 1);
    assert_eq!(parser.current_token().value, "2");
}

#[test]
fn test_parse_with_closure_reporter() {
    let tokens = tokenize("(1", None).unwrap();
    let mut seen = vec![];
    let mut reporter = |token: &Token, message: &str| seen.push((token.kind, message.to_string()));

    let expr = parse(&tokens, &mut reporter);

    assert_eq!(expr, None);
    assert_eq!(seen, vec![(TokenKind::EOF, "Expect ')' after expression.".to_string())]);
}

#[test]
fn test_token_stream_primitives() {
    let tokens = tokenize("1 + 2", None).unwrap();
    let mut collector = DiagnosticCollector::new();
    let mut parser = Parser::new(&tokens, &mut collector);

    assert!(parser.check(TokenKind::Number));
    assert!(parser.check_any(&[TokenKind::Plus, TokenKind::Number]));
    assert!(!parser.advance_if_any(&[TokenKind::Plus]));
    assert_eq!(parser.position(), 0);

    assert_eq!(parser.advance().value, "1");
    assert_eq!(parser.previous_token().value, "1");
    assert!(parser.advance_if_any(&[TokenKind::Plus]));
    assert_eq!(parser.current_token_kind(), TokenKind::Number);

    parser.advance();
    assert!(parser.is_at_end());
    assert!(!parser.check(TokenKind::EOF));

    // Advancing at EOF keeps the cursor on EOF
    assert_eq!(parser.advance().value, "2");
    assert_eq!(parser.position(), 3);
}

#[test]
fn test_synchronize_after_semicolon() {
    let tokens = tokenize("(1 2; print 3", None).unwrap();
    let mut collector = DiagnosticCollector::new();
    let mut parser = Parser::new(&tokens, &mut collector);

    assert_eq!(parser.parse(), None);
    assert_eq!(parser.current_token().value, "2");

    parser.synchronize();

    assert_eq!(parser.current_token_kind(), TokenKind::Print);
    assert_eq!(parser.previous_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_synchronize_before_statement_keyword() {
    let tokens = tokenize("(1 2 3 var x", None).unwrap();
    let mut collector = DiagnosticCollector::new();
    let mut parser = Parser::new(&tokens, &mut collector);

    parser.parse();
    parser.synchronize();

    assert_eq!(parser.current_token_kind(), TokenKind::Var);
}

#[test]
fn test_synchronize_runs_to_eof() {
    let tokens = tokenize("(1 2 3", None).unwrap();
    let mut collector = DiagnosticCollector::new();
    let mut parser = Parser::new(&tokens, &mut collector);

    parser.parse();
    parser.synchronize();

    assert!(parser.is_at_end());
    assert_eq!(parser.position(), tokens.len() - 1);
}
