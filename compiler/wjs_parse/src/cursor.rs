//! Token cursor for navigating the token stream.

use crate::ParseError;
use tracing::trace;
use wjs_ir::{Position, Token, TokenKind};

/// Cursor over a token slice.
///
/// The stream is treated as ending in `Eof` even when the caller's slice
/// does not: past the last token the cursor reports a synthesized `Eof`
/// positioned at that token. The cursor never moves past `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        let eof_pos = tokens
            .last()
            .map(|t| t.pos.clone())
            .unwrap_or_default();
        Cursor {
            tokens,
            eof: Token::new(TokenKind::Eof, "", eof_pos),
            pos: 0,
        }
    }

    /// Get the current token.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_pos(&self) -> &Position {
        &self.current().pos
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it. At `Eof` the cursor stays put.
    pub(crate) fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        let token = self.tokens.get(index).unwrap_or(&self.eof);
        trace!(pos = index, kind = %token.kind, "advance");
        token
    }

    /// Consume a token of `kind` or fail naming what was `expected`.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(expected, self.current()))
        }
    }
}
