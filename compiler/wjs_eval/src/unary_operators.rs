//! Unary operator implementations for the evaluator.

use crate::{RuntimeErrorKind, Value};
use wjs_ir::UnaryOp;

/// Evaluate a unary operation on an already-evaluated operand.
///
/// `-` negates numbers (integer negation is checked), `!` inverts booleans.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> Result<Value, RuntimeErrorKind> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(RuntimeErrorKind::IntegerOverflow {
                operation: "negation",
            }),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, _) => Err(RuntimeErrorKind::InvalidUnaryOperand {
            op,
            expected: "a number",
        }),
        (UnaryOp::Not, _) => Err(RuntimeErrorKind::InvalidUnaryOperand {
            op,
            expected: "a boolean",
        }),
    }
}
