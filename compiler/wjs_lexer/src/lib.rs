//! Lexer for WJS using logos.
//!
//! The lexer never fails. Unknown characters and unterminated strings or
//! templates become `Illegal` tokens carrying the offending text, and
//! scanning continues; the parser decides what to do with them.
//!
//! Tokens come out one at a time from [`Lexer::next_token`] (which keeps
//! returning `Eof` at the end), from the `Iterator` impl (exactly one `Eof`,
//! then `None`) or all at once from [`Lexer::all_tokens`].

mod escape;
mod keywords;
mod raw_token;

pub use escape::cook_escapes;

use logos::Logos;
use raw_token::RawToken;
use std::iter::FusedIterator;
use std::sync::Arc;
use wjs_ir::{Position, Token, TokenKind};

/// Lexer over one script source.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Position of `source[cursor]`.
    pos: Position,
    cursor: usize,
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer for `source`. `script` is the file name, or empty for a
    /// direct statement.
    pub fn new(script: impl Into<Arc<str>>, source: &'src str) -> Self {
        Lexer::starting_at(source, Position::start(script.into()))
    }

    /// Create a lexer for a fragment of a larger script whose first character
    /// sits at `start`. Used to re-lex template interpolations so their
    /// tokens point into the enclosing source.
    pub fn starting_at(source: &'src str, start: Position) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            pos: start,
            cursor: 0,
            done: false,
        }
    }

    /// Produce the next token. After the end of input every call returns
    /// `Eof`.
    pub fn next_token(&mut self) -> Token {
        let source = self.source;
        loop {
            let Some(result) = self.raw.next() else {
                let pos = self.position_at(source.len());
                return Token::new(TokenKind::Eof, "", pos);
            };
            let span = self.raw.span();
            let slice = &source[span.clone()];
            let (kind, lexeme) = match result {
                Ok(RawToken::LineComment) => continue,
                Ok(raw) => convert(raw, slice),
                Err(()) => (TokenKind::Illegal, slice),
            };
            let pos = self.position_at(span.start);
            return Token::new(kind, lexeme, pos);
        }
    }

    /// Collect every remaining token, ending with exactly one `Eof`.
    pub fn all_tokens(self) -> Vec<Token> {
        self.collect()
    }

    fn position_at(&mut self, offset: usize) -> Position {
        if let Some(skipped) = self.source.get(self.cursor..offset) {
            self.pos.advance(skipped);
            self.cursor = offset;
        }
        self.pos.clone()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lex `source` in one call.
pub fn tokenize(script: impl Into<Arc<str>>, source: &str) -> Vec<Token> {
    Lexer::new(script, source).all_tokens()
}

/// Map a raw token to its kind and lexeme. Quoted strings and templates lose
/// their delimiters; everything else keeps the matched text.
fn convert(raw: RawToken, slice: &str) -> (TokenKind, &str) {
    let kind = match raw {
        RawToken::Number => TokenKind::Number,
        RawToken::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Ident),
        RawToken::DoubleQuoted | RawToken::SingleQuoted => {
            return (TokenKind::Str, strip_delimiters(slice));
        }
        RawToken::Template => return (TokenKind::Template, strip_delimiters(slice)),
        RawToken::UnterminatedDoubleQuoted
        | RawToken::UnterminatedSingleQuoted
        | RawToken::UnterminatedTemplate
        | RawToken::LineComment => TokenKind::Illegal,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Dot => TokenKind::Dot,
    };
    (kind, slice)
}

/// Drop the one-byte opening and closing delimiters.
fn strip_delimiters(slice: &str) -> &str {
    slice
        .get(1..slice.len().saturating_sub(1))
        .unwrap_or_default()
}
