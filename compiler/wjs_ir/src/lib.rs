//! WJS IR - shared data structures for the WJS script engine.
//!
//! This crate contains the types every pipeline stage agrees on:
//! - `Position` for source locations
//! - `Token` / `TokenKind` for lexer output
//! - `BinaryOp` / `UnaryOp` with their precedence table
//! - AST nodes (`Program`, `Stmt`, `Expr`, ...)
//! - `check_valid`, the standalone validation pass
//! - `dump` and the `Display` source printer
//!
//! Nodes own their children (`Box<Expr>`), so a subtree is always fully
//! formed before it is attached to its parent. Nothing here is mutated after
//! construction.

pub mod ast;
mod operators;
mod position;
mod token;

pub use ast::{
    check_valid, dump, Expr, ExprKind, Ident, NumberLit, Positioned, Program, Stmt, StmtKind,
    TemplatePart, ValidationError, ValidationErrorKind,
};
pub use operators::{BinaryOp, UnaryOp};
pub use position::Position;
pub use token::{Token, TokenKind};
