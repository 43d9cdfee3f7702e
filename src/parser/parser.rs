//! Parser state and token-stream primitives.
//!
//! The `Parser` borrows an EOF-terminated token slice and a diagnostic sink,
//! and owns a single cursor into the slice. The precedence ladder itself
//! lives in `expr`; everything here is the plumbing it runs on.

use crate::{
    ast::expressions::Expr,
    errors::errors::{ErrorImpl, Reporter},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_comma, lookups::STATEMENT_STARTERS};

/// Raised after a diagnostic has been reported for an error the parser can't
/// recover from locally. Carries nothing; the sink already has the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

pub type ParseResult<T> = Result<T, ParseError>;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a, 'r> {
    /// The tokens to parse, ending in `EOF`
    tokens: &'a [Token],
    /// Index of the current token, never past the `EOF` token
    pos: usize,
    /// Where diagnostics go
    reporter: &'r mut dyn Reporter,
}

impl<'a, 'r> Parser<'a, 'r> {
    /// Creates a new Parser instance.
    ///
    /// # Panics
    ///
    /// If `tokens` is not terminated by an `EOF` token.
    pub fn new(tokens: &'a [Token], reporter: &'r mut dyn Reporter) -> Self {
        assert!(
            tokens.last().is_some_and(|token| token.kind == TokenKind::EOF),
            "token sequence must end with an EOF token"
        );

        Parser {
            tokens,
            pos: 0,
            reporter,
        }
    }

    /// Parses one comma-expression from the start of the token sequence.
    ///
    /// Returns `None` when the expression could not be parsed at all; the
    /// reason has already been reported. Tokens after the expression are left
    /// unconsumed.
    pub fn parse(&mut self) -> Option<Expr> {
        match parse_comma(self) {
            Ok(expr) => Some(expr),
            Err(ParseError) => {
                log::debug!("expression abandoned at token {}", self.pos);
                None
            }
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Current cursor index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the current token is of `kind`. Always false at `EOF`.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.check(*kind))
    }

    /// Consumes the current token if it is one of `kinds`.
    pub fn advance_if_any(&mut self, kinds: &[TokenKind]) -> bool {
        if self.check_any(kinds) {
            self.advance();
            return true;
        }

        false
    }

    /// Consumes the current token and returns it. At `EOF` nothing is consumed
    /// and the previous token is returned.
    pub fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.pos += 1;
        }

        self.previous_token()
    }

    /// Consumes a token of the expected kind, or reports `error` against the
    /// current token and fails.
    pub fn expect(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> ParseResult<&'a Token> {
        if self.check(expected_kind) {
            return Ok(self.advance());
        }

        let token = self.current_token();
        Err(self.error(token, error))
    }

    /// Reports `error` against `token` and hands back the failure signal.
    pub fn error(&mut self, token: &Token, error: ErrorImpl) -> ParseError {
        self.report(token, &error);
        ParseError
    }

    /// Reports `error` against `token` without failing.
    pub fn report(&mut self, token: &Token, error: &ErrorImpl) {
        log::debug!("{} at token {} ({})", error, self.pos, token.kind);
        self.reporter.report(token, &error.to_string());
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// Consumes the offending token, then stops either just after a `;` or in
    /// front of a token that starts a statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous_token().kind == TokenKind::Semicolon {
                return;
            }

            if self.current_token().is_one_of_many(&STATEMENT_STARTERS) {
                return;
            }

            self.advance();
        }
    }
}

/// Parses a token sequence into a single expression.
///
/// This is the main entry point for parsing. Diagnostics are sent to
/// `reporter` as they are found.
///
/// # Returns
///
/// The expression tree, which may contain `Operand::Missing` nodes if a left
/// operand had to be recovered, or `None` if parsing failed.
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Option<Expr> {
    let mut parser = Parser::new(tokens, reporter);
    parser.parse()
}
