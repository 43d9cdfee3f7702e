use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingLeftOperand => "MissingLeftOperand",
            ErrorImpl::ExpectExpression => "ExpectExpression",
            ErrorImpl::ExpectClosingParen => "ExpectClosingParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", character))
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is missing its closing `\"`"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::MissingLeftOperand => ErrorTip::Suggestion(String::from(
                "Binary operator has nothing on its left-hand side",
            )),
            ErrorImpl::ExpectExpression => ErrorTip::None,
            ErrorImpl::ExpectClosingParen => {
                ErrorTip::Suggestion(String::from("Did you forget a `)`?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Every error the lexer and parser can produce.
///
/// The `Display` text of the parser variants is the exact message handed to a
/// [`Reporter`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("Missing left operand.")]
    MissingLeftOperand,
    #[error("Expect expression.")]
    ExpectExpression,
    #[error("Expect ')' after expression.")]
    ExpectClosingParen,
}

/// A message reported against a single token.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub token: Token,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.token.kind == TokenKind::EOF {
            write!(f, "[line {}] Error at end: {}", self.token.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.line, self.token.value, self.message
            )
        }
    }
}

/// Sink for parser diagnostics.
///
/// Called once per malformed construct, before the parser either recovers or
/// gives up on the expression.
pub trait Reporter {
    fn report(&mut self, token: &Token, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(&Token, &str),
{
    fn report(&mut self, token: &Token, message: &str) {
        self(token, message)
    }
}

/// Keeps every diagnostic in the order it was reported.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for DiagnosticCollector {
    fn report(&mut self, token: &Token, message: &str) {
        self.diagnostics.push(Diagnostic {
            token: token.clone(),
            message: message.to_string(),
        });
    }
}

/// Forwards diagnostics to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter {
    count: usize,
}

impl LogReporter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, token: &Token, message: &str) {
        self.count += 1;
        log::error!(
            "{}",
            Diagnostic {
                token: token.clone(),
                message: message.to_string(),
            }
        );
    }
}
