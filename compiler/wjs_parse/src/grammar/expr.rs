//! Expression parsing: precedence climbing, unary, postfix, primary.

use crate::{ParseError, ParseErrorKind, Parser};
use tracing::trace;
use wjs_ir::{BinaryOp, Expr, ExprKind, Ident, NumberLit, TokenKind, UnaryOp};
use wjs_lexer::cook_escapes;

impl Parser<'_> {
    /// Parse any expression.
    #[inline]
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(0)
    }

    /// Precedence climbing. Consumes operators binding tighter than
    /// `min_prec`; the right operand is parsed at the operator's own level,
    /// which makes every binary operator left-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = BinaryOp::from_token(self.cursor.current_kind()) {
            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }
            let pos = self.cursor.advance().pos.clone();
            let right = self.parse_binary(prec)?;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                pos,
            );
        }

        Ok(left)
    }

    /// `-x` and `!x`, nesting to any depth.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = UnaryOp::from_token(self.cursor.current_kind()) {
            let pos = self.cursor.advance().pos.clone();
            let operand = self.parse_unary()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                pos,
            ));
        }
        self.parse_postfix()
    }

    /// Apply calls, indexing and member access left to right, so
    /// `a.b[0](1)` is a call of an index of a member.
    pub(crate) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => {
                    let pos = self.cursor.advance().pos.clone();
                    let args = self.parse_call_args()?;
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        pos,
                    );
                }
                TokenKind::LBracket => {
                    let pos = self.cursor.advance().pos.clone();
                    let index = self.parse_expr()?;
                    self.cursor
                        .expect(TokenKind::RBracket, "']' after index")?;
                    expr = Expr::new(
                        ExprKind::Index {
                            target: Box::new(expr),
                            index: Box::new(index),
                        },
                        pos,
                    );
                }
                TokenKind::Dot => {
                    let pos = self.cursor.advance().pos.clone();
                    let token = self
                        .cursor
                        .expect(TokenKind::Ident, "property name after '.'")?;
                    let field = Ident::new(token.lexeme.clone(), token.pos.clone());
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            field,
                        },
                        pos,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Arguments after `(`, through the closing `)`.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor
            .expect(TokenKind::RParen, "')' after arguments")?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        trace!(pos = %token.pos, kind = %token.kind, "parse_primary");
        let pos = token.pos.clone();

        let kind = match token.kind {
            TokenKind::Number => ExprKind::Number(parse_number(&token.lexeme).ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        lexeme: token.lexeme.clone(),
                    },
                    pos.clone(),
                )
            })?),
            TokenKind::Str => ExprKind::Str(cook_escapes(&token.lexeme).into_owned()),
            TokenKind::Template => {
                let parts = Self::lower_template(&token.lexeme, &pos.advanced("`"))?;
                ExprKind::Template(parts)
            }
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Null => ExprKind::Null,
            TokenKind::Ident => ExprKind::Ident(token.lexeme.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor
                    .expect(TokenKind::RParen, "')' after expression")?;
                return Ok(inner);
            }
            _ => return Err(ParseError::expected_expression(token)),
        };

        self.cursor.advance();
        Ok(Expr::new(kind, pos))
    }
}

/// Integer first, float only when that fails: `5` is an Integer, `5.0` a
/// Float, and an integer too large for i64 becomes a Float. A literal too
/// large even for f64 is rejected; infinity has no source form.
fn parse_number(lexeme: &str) -> Option<NumberLit> {
    if let Ok(n) = lexeme.parse::<i64>() {
        return Some(NumberLit::Int(n));
    }
    lexeme
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .map(NumberLit::Float)
}
