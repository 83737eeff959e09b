//! Keyword resolution.
//!
//! Identifiers are matched by one pattern and then looked up here, so a
//! keyword lexeme is never returned as `Ident`. Length bucketing rejects most
//! identifiers without a string comparison.

use wjs_ir::TokenKind;

/// Look up a reserved word. Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "null" => Some(TokenKind::Null),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        _ => None,
    }
}
