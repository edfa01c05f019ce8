//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens from the lexer one at a time, keeping the current
//! token and a single token of lookahead. Statements are parsed by recursive
//! descent and expressions by a Pratt parser driven by the rule tables in
//! [`super::lookups`].
//!
//! Malformed input never aborts the parse: each failure is recorded in the
//! parser's [`Diagnostics`] and the enclosing statement loop moves on.

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostics, Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Deepest nesting of expressions and blocks the parser descends into.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, read lazily
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in detection order
    diagnostics: Diagnostics,
    /// Expressions and blocks currently open
    depth: usize,
    /// Set once nesting overflows; the rest of the input is skipped
    halted: bool,
}

impl Parser {
    /// Creates a new Parser and primes the current and lookahead tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            diagnostics: Diagnostics::new(),
            depth: 0,
            halted: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into the current slot and reads a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the lookahead has the expected kind, otherwise records an error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to record if expectation fails
    ///
    /// # Returns
    ///
    /// Returns true if the lookahead matched and the parser advanced onto it.
    pub fn expect_peek_error(&mut self, expected_kind: TokenKind, error: Option<ErrorImpl>) -> bool {
        if self.peek.kind == expected_kind {
            self.advance();
            return true;
        }

        let error = error.unwrap_or(ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            found: self.peek.kind,
        });
        let position = self.peek.position();
        self.record(error, position);

        false
    }

    /// Expects the lookahead to be of the specified kind with the default error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        self.expect_peek_error(expected_kind, None)
    }

    /// Records an error at the current token.
    pub fn report(&mut self, error: ErrorImpl) {
        let position = self.get_position();
        self.record(error, position);
    }

    fn record(&mut self, error: ErrorImpl, position: Position) {
        // Unwinding after a nesting overflow would only add noise
        if !self.halted {
            self.diagnostics.report(error, position);
        }
    }

    /// Opens one level of nesting for an expression or block.
    ///
    /// Past [`MAX_NESTING_DEPTH`] this records `NestingTooDeep` at the current
    /// token, skips to EOF and returns false. Every successful call must be
    /// paired with [`Parser::leave_nested`].
    pub fn enter_nested(&mut self) -> bool {
        if self.halted {
            return false;
        }

        if self.depth >= MAX_NESTING_DEPTH {
            self.report(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            log::debug!("Nesting overflow at {}, skipping to EOF", self.get_position());

            self.halted = true;
            while self.current.kind != TokenKind::EOF {
                self.advance();
            }
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.position()
    }

    /// Parses statements until EOF.
    ///
    /// Statements that fail to parse are left out of the program; parsing
    /// resumes at the token after the one where the failure was detected.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            } else {
                log::debug!(
                    "Statement failed at {}, resuming after {:?}",
                    self.get_position(),
                    self.current.literal
                );
            }
            self.advance();
        }

        log::debug!(
            "Parsed {} statements with {} errors",
            statements.len(),
            self.diagnostics.len()
        );

        Program { statements }
    }

    /// Recorded errors formatted as `line <L> column <C>: <message>`.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics
            .as_slice()
            .iter()
            .map(|error| error.to_string())
            .collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        self.diagnostics.as_slice()
    }

    pub fn into_diagnostics(self) -> Vec<Error> {
        self.diagnostics.into_vec()
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// pair and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the recorded errors)
/// - The parsed program, partial if any errors were recorded
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
