//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic sinks.

use crate::errors::errors::{
    Diagnostic, DiagnosticCollector, Error, ErrorImpl, ErrorTip, LogReporter, Reporter,
};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};
use std::rc::Rc;

fn token(kind: TokenKind, value: &str, line: u32) -> Token {
    Token {
        kind,
        value: value.to_string(),
        literal: None,
        line,
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position(10, Rc::new("test.lox".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().0, 10);
    assert_eq!(error.to_string(), "Unexpected character. at test.lox:10");
}

#[test]
fn test_parser_messages() {
    assert_eq!(ErrorImpl::MissingLeftOperand.to_string(), "Missing left operand.");
    assert_eq!(ErrorImpl::ExpectExpression.to_string(), "Expect expression.");
    assert_eq!(
        ErrorImpl::ExpectClosingParen.to_string(),
        "Expect ')' after expression."
    );
}

#[test]
fn test_error_names() {
    let position = Position(0, Rc::new("test.lox".to_string()));

    for (error_impl, name) in [
        (ErrorImpl::UnterminatedString, "UnterminatedString"),
        (ErrorImpl::NumberParseError { token: "1x".to_string() }, "NumberParseError"),
        (ErrorImpl::MissingLeftOperand, "MissingLeftOperand"),
        (ErrorImpl::ExpectExpression, "ExpectExpression"),
        (ErrorImpl::ExpectClosingParen, "ExpectClosingParen"),
    ] {
        assert_eq!(Error::new(error_impl, position.clone()).get_error_name(), name);
    }
}

#[test]
fn test_error_tip() {
    let position = Position(0, Rc::new("test.lox".to_string()));

    let error = Error::new(ErrorImpl::ExpectExpression, position.clone());
    assert!(matches!(error.get_tip(), ErrorTip::None));

    let error = Error::new(ErrorImpl::ExpectClosingParen, position);
    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        token: token(TokenKind::Equals, "==", 3),
        message: "Missing left operand.".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "[line 3] Error at '==': Missing left operand.");

    let diagnostic = Diagnostic {
        token: token(TokenKind::EOF, "", 1),
        message: "Expect expression.".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "[line 1] Error at end: Expect expression.");
}

#[test]
fn test_diagnostic_collector_keeps_order() {
    let mut collector = DiagnosticCollector::new();
    assert!(!collector.had_error());

    collector.report(&token(TokenKind::Plus, "+", 1), "first");
    collector.report(&token(TokenKind::EOF, "", 2), "second");

    assert!(collector.had_error());
    assert_eq!(collector.messages(), vec!["first", "second"]);
    assert_eq!(collector.diagnostics()[1].token.line, 2);
    assert_eq!(collector.into_diagnostics().len(), 2);
}

#[test]
fn test_log_reporter_counts() {
    let mut reporter = LogReporter::default();

    reporter.report(&token(TokenKind::Star, "*", 1), "Missing left operand.");

    assert_eq!(reporter.count(), 1);
}
