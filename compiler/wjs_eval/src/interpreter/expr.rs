//! Expression evaluation.

use super::Interpreter;
use crate::{evaluate_binary, evaluate_unary, RuntimeError, RuntimeErrorKind, Value};
use wjs_ir::{Expr, ExprKind, NumberLit, TemplatePart};

impl Interpreter {
    /// Evaluate one expression against the current globals.
    pub fn eval_expr(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Ident(name) => self.env.lookup(name).map_err(|kind| kind.at(&expr.pos)),
            ExprKind::Number(NumberLit::Int(n)) => Ok(Value::Int(*n)),
            ExprKind::Number(NumberLit::Float(x)) => Ok(Value::Float(*x)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Template(parts) => self.eval_template(parts),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, *op).map_err(|kind| kind.at(&expr.pos))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(&operand, *op).map_err(|kind| kind.at(&expr.pos))
            }
            ExprKind::Call { callee, args } => {
                let func = match self.eval_expr(callee)? {
                    Value::Callable(func) => func,
                    other => {
                        return Err(RuntimeErrorKind::NotCallable {
                            type_name: other.type_name(),
                        }
                        .at(&expr.pos));
                    }
                };
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                func.call(args).map_err(|kind| kind.at(&expr.pos))
            }
            ExprKind::Member { object, field } => match self.eval_expr(object)? {
                Value::Object(map) => {
                    let found = map.borrow().get(&field.name).cloned();
                    found.ok_or_else(|| {
                        RuntimeErrorKind::PropertyNotFound {
                            field: field.name.clone(),
                        }
                        .at(&expr.pos)
                    })
                }
                other => Err(RuntimeErrorKind::NotAnObject {
                    type_name: other.type_name(),
                }
                .at(&expr.pos)),
            },
            ExprKind::Index { target, index } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                index_value(&target, &index).map_err(|kind| kind.at(&expr.pos))
            }
        }
    }

    /// Concatenate text parts with the stringified interpolations.
    fn eval_template(&self, parts: &[TemplatePart]) -> Result<Value, RuntimeError> {
        let mut out = String::new();
        for part in parts {
            match part {
                TemplatePart::Text { value, .. } => out.push_str(value),
                TemplatePart::Interpolation { expr, .. } => {
                    out.push_str(&self.eval_expr(expr)?.to_string());
                }
            }
        }
        Ok(Value::string(out))
    }
}

/// `target[index]` for reads.
fn index_value(target: &Value, index: &Value) -> Result<Value, RuntimeErrorKind> {
    match target {
        Value::Array(items) => {
            let items = items.borrow();
            let slot = array_index(index, items.len())?;
            Ok(items[slot].clone())
        }
        Value::Object(map) => {
            let key = index.as_str().ok_or(RuntimeErrorKind::ObjectKeyNotString)?;
            let found = map.borrow().get(key).cloned();
            found.ok_or_else(|| RuntimeErrorKind::KeyNotFound {
                key: key.to_string(),
            })
        }
        other => Err(RuntimeErrorKind::NotIndexable {
            type_name: other.type_name(),
        }),
    }
}

/// Resolve an array index. Integers are used as is, floats truncate toward
/// zero; the result must lie in `0..len`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float indices truncate toward zero"
)]
pub(super) fn array_index(index: &Value, len: usize) -> Result<usize, RuntimeErrorKind> {
    let index = match index {
        Value::Int(n) => *n,
        Value::Float(x) => x.trunc() as i64,
        _ => return Err(RuntimeErrorKind::ArrayIndexNotNumber),
    };
    usize::try_from(index)
        .ok()
        .filter(|slot| *slot < len)
        .ok_or(RuntimeErrorKind::IndexOutOfBounds { index })
}
