//! Semantic well-formedness checks.
//!
//! `check_valid` is independent of parsing: a host (a linter, say) may run it
//! on a program it never executes, or on a program it built by hand. Nodes
//! own their children, so incomplete binary, unary and interpolation nodes
//! cannot be constructed; the remaining defects are the ones the type system
//! does not rule out.

use super::{Expr, ExprKind, Ident, Program, Stmt, StmtKind, TemplatePart};
use crate::Position;
use thiserror::Error;

/// What is wrong with the program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("invalid let statement: missing variable name")]
    MissingLetName,
    #[error("empty identifier")]
    EmptyIdentifier,
    #[error("invalid assignment target: must be identifier, member, or index, found {found}")]
    InvalidAssignmentTarget { found: &'static str },
    #[error("empty template string")]
    EmptyTemplate,
    #[error("invalid member field")]
    EmptyMemberField,
}

/// First semantic defect found, with the position of the offending node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {pos}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub pos: Position,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pos: &Position) -> Self {
        ValidationError {
            kind,
            pos: pos.clone(),
        }
    }
}

/// Walk the program and return the first semantic error, in program order.
pub fn check_valid(program: &Program) -> Result<(), ValidationError> {
    program.statements.iter().try_for_each(check_stmt)
}

fn check_stmt(stmt: &Stmt) -> Result<(), ValidationError> {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            if name.name.is_empty() {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingLetName,
                    &stmt.pos,
                ));
            }
            check_expr(value)
        }
        StmtKind::Assign { target, value } => {
            if !target.is_assignable() {
                return Err(ValidationError::new(
                    ValidationErrorKind::InvalidAssignmentTarget {
                        found: target.node_name(),
                    },
                    &stmt.pos,
                ));
            }
            check_expr(target)?;
            check_expr(value)
        }
        StmtKind::Expr(value) => check_expr(value),
    }
}

fn check_expr(expr: &Expr) -> Result<(), ValidationError> {
    match &expr.kind {
        ExprKind::Ident(name) => {
            if name.is_empty() {
                return Err(ValidationError::new(
                    ValidationErrorKind::EmptyIdentifier,
                    &expr.pos,
                ));
            }
            Ok(())
        }
        ExprKind::Number(_) | ExprKind::Str(_) | ExprKind::Bool(_) | ExprKind::Null => Ok(()),
        ExprKind::Template(parts) => {
            if parts.is_empty() {
                return Err(ValidationError::new(
                    ValidationErrorKind::EmptyTemplate,
                    &expr.pos,
                ));
            }
            parts.iter().try_for_each(|part| match part {
                TemplatePart::Text { .. } => Ok(()),
                TemplatePart::Interpolation { expr, .. } => check_expr(expr),
            })
        }
        ExprKind::Binary { left, right, .. } => {
            check_expr(left)?;
            check_expr(right)
        }
        ExprKind::Unary { operand, .. } => check_expr(operand),
        ExprKind::Call { callee, args } => {
            check_expr(callee)?;
            args.iter().try_for_each(check_expr)
        }
        ExprKind::Member { object, field } => {
            check_expr(object)?;
            check_field(field, &expr.pos)
        }
        ExprKind::Index { target, index } => {
            check_expr(target)?;
            check_expr(index)
        }
    }
}

fn check_field(field: &Ident, member_pos: &Position) -> Result<(), ValidationError> {
    if field.name.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyMemberField,
            member_pos,
        ));
    }
    Ok(())
}
