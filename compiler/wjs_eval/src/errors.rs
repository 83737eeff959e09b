//! Runtime error types.
//!
//! `RuntimeErrorKind` is what went wrong; its `Display` is the canonical
//! message. Operators and built-ins return bare kinds and the interpreter
//! attaches the position of the node being evaluated with
//! [`RuntimeErrorKind::at`].

use crate::MapIoError;
use thiserror::Error;
use wjs_ir::{BinaryOp, Position, UnaryOp};

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    // Access
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("property '{field}' not found")]
    PropertyNotFound { field: String },
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },
    #[error("array index out of bounds: {index}")]
    IndexOutOfBounds { index: i64 },
    #[error("cannot access property of {type_name}")]
    NotAnObject { type_name: &'static str },
    #[error("cannot index {type_name}")]
    NotIndexable { type_name: &'static str },
    #[error("array index must be a number")]
    ArrayIndexNotNumber,
    #[error("object key must be a string")]
    ObjectKeyNotString,

    // Assignment
    #[error("cannot assign to member of {type_name}")]
    MemberAssignTarget { type_name: &'static str },
    #[error("cannot index assign to {type_name}")]
    IndexAssignTarget { type_name: &'static str },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    // Operators
    #[error("type mismatch for + operator")]
    AddTypeMismatch,
    #[error("{op} operator requires numbers")]
    NumericOperands { op: BinaryOp },
    #[error("unary {op} requires {expected}")]
    InvalidUnaryOperand { op: UnaryOp, expected: &'static str },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulus by zero")]
    ModulusByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Calls
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },
    #[error("{name} expects {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Built-ins
    #[error("load expects a string path")]
    LoadPathNotString,
    #[error("save expects a Map as the first argument")]
    SaveTargetNotMap,
    #[error("save expects a string as the second argument")]
    SavePathNotString,
    #[error("load error: {0}")]
    Load(MapIoError),
    #[error("save error: {0}")]
    Save(MapIoError),

    /// Raised by host-defined built-ins.
    #[error("{message}")]
    Custom { message: String },
}

impl RuntimeErrorKind {
    /// Error for host built-ins that do not fit a specific category.
    pub fn custom(message: impl Into<String>) -> Self {
        RuntimeErrorKind::Custom {
            message: message.into(),
        }
    }

    /// Attach the source position where evaluation failed.
    #[cold]
    pub fn at(self, pos: &Position) -> RuntimeError {
        RuntimeError {
            kind: self,
            pos: pos.clone(),
        }
    }
}

/// A runtime failure with the position of the expression or statement that
/// raised it. Execution stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Runtime error at {pos}: {kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub pos: Position,
}

impl RuntimeError {
    /// The message without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
