use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A fatal error together with where it happened.
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

    /// Parser error for a token of the wrong kind.
    pub fn unexpected(token: &Token, expected: Expected) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                token: token.clone(),
            },
            token.position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "LexerError",
            ErrorImpl::UnexpectedToken { .. } => "ParserError",
            ErrorImpl::UnexpectedEndOfInput { .. } => "ParserError",
        }
    }

    /// What the parser was looking for, if this is a parser error.
    pub fn expected(&self) -> Option<&Expected> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(expected),
            ErrorImpl::UnexpectedEndOfInput { expected } => Some(expected),
            ErrorImpl::UnrecognisedToken { .. } => None,
        }
    }

    /// The offending token, if there was one.
    pub fn token(&self) -> Option<&Token> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token, .. } => Some(token),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unrecognised token {token:?}")]
    UnrecognisedToken { token: String },
    #[error("Expected {expected}, found {}", .token.kind)]
    UnexpectedToken { expected: Expected, token: Token },
    #[error("Expected {expected}, found END_OF_INPUT")]
    UnexpectedEndOfInput { expected: Expected },
}

/// The token kind (or kinds) a production would have accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    OneOf(Vec<TokenKind>),
}

impl Expected {
    pub fn contains(&self, kind: TokenKind) -> bool {
        match self {
            Expected::Kind(expected) => *expected == kind,
            Expected::OneOf(kinds) => kinds.contains(&kind),
        }
    }
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Expected::Kind(kind)
    }
}

impl From<&[TokenKind]> for Expected {
    fn from(kinds: &[TokenKind]) -> Self {
        Expected::OneOf(kinds.to_vec())
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::OneOf(kinds) => {
                let names = kinds.iter().map(TokenKind::name).collect::<Vec<_>>();
                write!(f, "one of {}", names.join(", "))
            }
        }
    }
}
