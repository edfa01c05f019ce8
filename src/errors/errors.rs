use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A single positioned diagnostic recorded while parsing.
#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message without its position prefix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingDelimiter { .. } => "MissingDelimiter",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::UnexpectedStatementStart { .. } => "UnexpectedStatementStart",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::UnterminatedBlock { .. } => "UnterminatedBlock",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Insert `{}` here", expected))
            }
            ErrorImpl::MissingDelimiter {
                construct, expected, ..
            } => ErrorTip::Suggestion(format!(
                "A `{}` statement needs `{}` at this point",
                construct, expected
            )),
            ErrorImpl::NoPrefixRule { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedStatementStart { .. } => ErrorTip::Suggestion(String::from(
                "Statements start with an identifier, `if`, `while` or `begin`",
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit or an invalid octal literal?",
                token
            )),
            ErrorImpl::UnterminatedBlock { construct } => {
                ErrorTip::Suggestion(format!("Close the `{}` block with `end`", construct))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression or block into smaller statements",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("{construct} statement is missing `{expected}`: expected {expected}, got {found}")]
    MissingDelimiter {
        construct: TokenKind,
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("cannot parse {token}")]
    NoPrefixRule { token: String },
    #[error("unexpected start of statement: {token}")]
    UnexpectedStatementStart { token: String },
    #[error("cannot parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("{construct} block is missing `end`: expected end, got EOF")]
    UnterminatedBlock { construct: TokenKind },
    #[error("nesting exceeds {limit} levels, the rest of the input is skipped")]
    NestingTooDeep { limit: usize },
}

/// Collects diagnostics in detection order.
///
/// Parse functions never return errors to their caller; they report them here
/// and let the enclosing statement loop carry on.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn report(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        log::debug!("Recorded {}", error);
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.errors
    }
}
