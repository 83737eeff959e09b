//! Statement parsing.

use crate::{ParseError, ParseErrorKind, Parser};
use tracing::trace;
use wjs_ir::{Ident, Position, Stmt, StmtKind, TokenKind};

impl Parser<'_> {
    /// Parse one statement. Every form ends in a mandatory `;`.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_pos().clone();
        trace!(pos = %start, kind = %self.cursor.current_kind(), "parse_statement");

        if self.cursor.check(TokenKind::Let) {
            return self.parse_let(start);
        }

        // The target of an assignment is only known after its postfix chain
        // (`a.b[0] = 1;`), so parse a full expression and then look for `=`.
        let expr = self.parse_expr()?;
        if self.cursor.check(TokenKind::Eq) {
            if !expr.is_assignable() {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidAssignmentTarget {
                        found: expr.node_name(),
                    },
                    start,
                ));
            }
            self.cursor.advance();
            let value = self.parse_expr()?;
            self.cursor
                .expect(TokenKind::Semicolon, "';' after assignment")?;
            return Ok(Stmt::new(
                StmtKind::Assign {
                    target: expr,
                    value,
                },
                start,
            ));
        }

        self.cursor
            .expect(TokenKind::Semicolon, "';' after expression")?;
        Ok(Stmt::new(StmtKind::Expr(expr), start))
    }

    /// `let IDENT = expr ;`
    fn parse_let(&mut self, start: Position) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let token = self
            .cursor
            .expect(TokenKind::Ident, "identifier after 'let'")?;
        let name = Ident::new(token.lexeme.clone(), token.pos.clone());
        self.cursor
            .expect(TokenKind::Eq, "'=' after variable name")?;
        let value = self.parse_expr()?;
        self.cursor
            .expect(TokenKind::Semicolon, "';' after let statement")?;
        Ok(Stmt::new(StmtKind::Let { name, value }, start))
    }
}
