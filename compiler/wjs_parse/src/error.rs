//! Parse error types.

use thiserror::Error;
use wjs_ir::{Position, Token, TokenKind};

/// What went wrong. The `Display` text is the canonical message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("illegal character {lexeme:?}")]
    IllegalCharacter { lexeme: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("invalid assignment target: must be identifier, member, or index, found {found}")]
    InvalidAssignmentTarget { found: &'static str },
    #[error("invalid number literal {lexeme:?}")]
    InvalidNumber { lexeme: String },
    #[error("empty interpolation in template")]
    EmptyInterpolation,
    #[error("unterminated interpolation in template")]
    UnterminatedInterpolation,
}

/// The first structural error in a token stream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {pos}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: Position) -> Self {
        ParseError { kind, pos }
    }

    /// `token` is not what the grammar allows here.
    ///
    /// Illegal tokens are reported for what they are rather than as a
    /// mismatch.
    pub(crate) fn unexpected(expected: &'static str, token: &Token) -> Self {
        if token.kind == TokenKind::Illegal {
            return ParseError::illegal(token);
        }
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.to_string(),
            },
            token.pos.clone(),
        )
    }

    pub(crate) fn expected_expression(token: &Token) -> Self {
        if token.kind == TokenKind::Illegal {
            return ParseError::illegal(token);
        }
        ParseError::new(
            ParseErrorKind::ExpectedExpression {
                found: token.to_string(),
            },
            token.pos.clone(),
        )
    }

    pub(crate) fn illegal(token: &Token) -> Self {
        let kind = match token.lexeme.chars().next() {
            Some('"' | '\'') => ParseErrorKind::UnterminatedString,
            Some('`') => ParseErrorKind::UnterminatedTemplate,
            _ => ParseErrorKind::IllegalCharacter {
                lexeme: token.lexeme.clone(),
            },
        };
        ParseError::new(kind, token.pos.clone())
    }
}
