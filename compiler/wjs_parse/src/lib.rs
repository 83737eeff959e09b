//! Recursive descent parser for WJS.
//!
//! Statements are parsed by recursive descent and binary expressions by
//! precedence climbing. Parsing is fail-fast: the first structural error is
//! returned and nothing is recovered.
//!
//! Grammar, highest precedence first:
//!
//! ```text
//! primary   = NUMBER | STRING | TEMPLATE | true | false | null | IDENT | "(" expr ")"
//! postfix   = primary { "(" [ expr { "," expr } ] ")" | "[" expr "]" | "." IDENT }
//! unary     = ( "-" | "!" ) unary | postfix
//! binary    = unary { op unary }          (* * / %  >  + -  >  < <= > >=  >  == != *)
//! stmt      = "let" IDENT "=" expr ";" | postfix "=" expr ";" | expr ";"
//! ```

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;
use std::sync::Arc;
use tracing::debug;
use wjs_ir::{Expr, Program, Token};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream (normally ending in `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements until `Eof`.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let start = self.cursor.current_pos().clone();
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        debug!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements, start))
    }

    /// Parse one expression that must consume the whole stream.
    pub fn parse_standalone_expression(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::unexpected(
                "end of expression",
                self.cursor.current(),
            ));
        }
        Ok(expr)
    }
}

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parse a token stream holding a single expression followed by `Eof`.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_standalone_expression()
}

/// Lex and parse `source` in one call.
pub fn parse_source(script: impl Into<Arc<str>>, source: &str) -> Result<Program, ParseError> {
    let tokens = wjs_lexer::tokenize(script, source);
    parse(&tokens)
}
