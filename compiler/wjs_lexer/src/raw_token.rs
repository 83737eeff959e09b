//! Raw tokens produced by logos, before keyword resolution and positioning.

use logos::Logos;

/// Raw token from logos.
///
/// Quoted strings and templates each have a second, unterminated pattern
/// that runs to end of input; longest match picks the terminated form
/// whenever a closing delimiter exists.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    // === Comments ===
    #[regex(r"//[^\n]*")]
    LineComment,

    // === Operators ===
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(".")]
    Dot,

    // === Literals ===
    // No sign, no exponent: `-1` is a unary minus applied to `1`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // Keywords are resolved after matching.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleQuoted,
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    SingleQuoted,
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    Template,

    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#)]
    UnterminatedDoubleQuoted,
    #[regex(r"'([^'\\]|\\(.|\n))*\\?")]
    UnterminatedSingleQuoted,
    #[regex(r"`([^`\\]|\\(.|\n))*\\?")]
    UnterminatedTemplate,
}
