//! AST node definitions.
//!
//! The node set is closed: statements are `let`, assignment and expression
//! statements; expressions are literals, identifiers, operators and the three
//! postfix forms (call, member, index). Every node carries the `Position` of
//! the token that introduced it. Binary and postfix nodes are positioned at
//! their operator token so runtime errors point at the operator.

mod print;
mod validate;

pub use print::dump;
pub use validate::{check_valid, ValidationError, ValidationErrorKind};

use crate::{BinaryOp, Position, UnaryOp};

/// Capability shared by every node: it knows where it came from.
pub trait Positioned {
    fn pos(&self) -> &Position;
}

/// Root node. Statements are kept in program order.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub pos: Position,
}

impl Program {
    pub fn new(statements: Vec<Stmt>, pos: Position) -> Self {
        Program { statements, pos }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let name = value;` declares or rebinds a global.
    Let { name: Ident, value: Expr },
    /// `target = value;` where target is an identifier, member or index.
    Assign { target: Expr, value: Expr },
    /// `value;` evaluated for effect.
    Expr(Expr),
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: Position) -> Self {
        Stmt { kind, pos }
    }
}

/// A named identifier with its own position (used for `let` names and
/// member fields).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub pos: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Ident {
            name: name.into(),
            pos,
        }
    }
}

/// Numeric literal. Exactly one representation is present.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberLit {
    Int(i64),
    Float(f64),
}

/// One span of a template literal.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplatePart {
    /// Literal text, escapes already cooked.
    Text { value: String, pos: Position },
    /// `${ expr }`
    Interpolation { expr: Box<Expr>, pos: Position },
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Ident(String),
    Number(NumberLit),
    Str(String),
    Bool(bool),
    Null,
    Template(Vec<TemplatePart>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Member {
        object: Box<Expr>,
        field: Ident,
    },
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Expr { kind, pos }
    }

    /// Whether this expression may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Ident(_) | ExprKind::Member { .. } | ExprKind::Index { .. }
        )
    }

    /// Short node name, used in diagnostics.
    pub fn node_name(&self) -> &'static str {
        match self.kind {
            ExprKind::Ident(_) => "identifier",
            ExprKind::Number(_) => "number literal",
            ExprKind::Str(_) => "string literal",
            ExprKind::Bool(_) => "boolean literal",
            ExprKind::Null => "null literal",
            ExprKind::Template(_) => "template literal",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::Call { .. } => "call expression",
            ExprKind::Member { .. } => "member expression",
            ExprKind::Index { .. } => "index expression",
        }
    }
}

impl Positioned for Program {
    fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Positioned for Stmt {
    fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Positioned for Expr {
    fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Positioned for Ident {
    fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Positioned for TemplatePart {
    fn pos(&self) -> &Position {
        match self {
            TemplatePart::Text { pos, .. } | TemplatePart::Interpolation { pos, .. } => pos,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
