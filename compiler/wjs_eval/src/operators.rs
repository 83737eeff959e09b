//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch over the fixed value set. Numeric operators promote:
//! two integers stay integral, anything involving a float is computed in
//! floating point. Division always yields a float.

use crate::{RuntimeErrorKind, Value};
use wjs_ir::BinaryOp;

type OpResult = Result<Value, RuntimeErrorKind>;

/// Numeric operands after promotion.
enum Numbers {
    Ints(i64, i64),
    Floats(f64, f64),
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer operands widen to float when mixed with a float"
)]
fn promote(left: &Value, right: &Value) -> Option<Numbers> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(Numbers::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(Numbers::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Some(Numbers::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Some(Numbers::Floats(*a, *b)),
        _ => None,
    }
}

/// Checked integer arithmetic with overflow reported as an error.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> OpResult {
    result
        .map(Value::Int)
        .ok_or(RuntimeErrorKind::IntegerOverflow { operation })
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => {
            if let (Value::Str(a), Value::Str(b)) = (left, right) {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                return Ok(Value::string(joined));
            }
            let numbers = promote(left, right).ok_or(RuntimeErrorKind::AddTypeMismatch)?;
            eval_arith(numbers, op)
        }
        _ => {
            let numbers =
                promote(left, right).ok_or(RuntimeErrorKind::NumericOperands { op })?;
            if op.is_comparison() {
                Ok(Value::Bool(compare(&numbers, op)))
            } else {
                eval_arith(numbers, op)
            }
        }
    }
}

fn eval_arith(numbers: Numbers, op: BinaryOp) -> OpResult {
    match (op, numbers) {
        (BinaryOp::Div, numbers) => divide(numbers),
        (BinaryOp::Mod, numbers) => modulus(numbers),
        (BinaryOp::Add, Numbers::Ints(a, b)) => checked_arith(a.checked_add(b), "addition"),
        (BinaryOp::Sub, Numbers::Ints(a, b)) => checked_arith(a.checked_sub(b), "subtraction"),
        (BinaryOp::Mul, Numbers::Ints(a, b)) => {
            checked_arith(a.checked_mul(b), "multiplication")
        }
        (BinaryOp::Add, Numbers::Floats(a, b)) => Ok(Value::Float(a + b)),
        (BinaryOp::Sub, Numbers::Floats(a, b)) => Ok(Value::Float(a - b)),
        (BinaryOp::Mul, Numbers::Floats(a, b)) => Ok(Value::Float(a * b)),
        (op, _) => Err(RuntimeErrorKind::NumericOperands { op }),
    }
}

/// `/` is always floating point, even for two integers that divide evenly.
#[expect(
    clippy::cast_precision_loss,
    reason = "division result is defined as a float"
)]
fn divide(numbers: Numbers) -> OpResult {
    let (a, b) = match numbers {
        Numbers::Ints(a, b) => (a as f64, b as f64),
        Numbers::Floats(a, b) => (a, b),
    };
    if b == 0.0 {
        return Err(RuntimeErrorKind::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// `%` works on integers. Two integers give an integer; a float operand is
/// truncated toward zero first and the result is a float.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "float operands are truncated to integers by definition"
)]
fn modulus(numbers: Numbers) -> OpResult {
    let (a, b, integral) = match numbers {
        Numbers::Ints(a, b) => (a, b, true),
        Numbers::Floats(a, b) => (a.trunc() as i64, b.trunc() as i64, false),
    };
    if b == 0 {
        return Err(RuntimeErrorKind::ModulusByZero);
    }
    let rem = a
        .checked_rem(b)
        .ok_or(RuntimeErrorKind::IntegerOverflow {
            operation: "remainder",
        })?;
    Ok(if integral {
        Value::Int(rem)
    } else {
        Value::Float(rem as f64)
    })
}

fn compare(numbers: &Numbers, op: BinaryOp) -> bool {
    match *numbers {
        Numbers::Ints(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            _ => a >= b,
        },
        Numbers::Floats(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            _ => a >= b,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(left: Value, op: BinaryOp, right: Value) -> OpResult {
        evaluate_binary(&left, &right, op)
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(eval(5.into(), BinaryOp::Add, 3.into()), Ok(Value::Int(8)));
        assert_eq!(eval(5.into(), BinaryOp::Sub, 8.into()), Ok(Value::Int(-3)));
        assert_eq!(eval(6.into(), BinaryOp::Mul, 7.into()), Ok(Value::Int(42)));
        assert_eq!(eval(7.into(), BinaryOp::Mod, 3.into()), Ok(Value::Int(1)));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(
            eval(5.0.into(), BinaryOp::Add, 3.into()),
            Ok(Value::Float(8.0))
        );
        assert_eq!(
            eval(1.into(), BinaryOp::Mul, 0.5.into()),
            Ok(Value::Float(0.5))
        );
    }

    #[test]
    fn division_is_always_float() {
        assert_eq!(eval(20.into(), BinaryOp::Div, 4.into()), Ok(Value::Float(5.0)));
        assert_eq!(eval(7.into(), BinaryOp::Div, 2.into()), Ok(Value::Float(3.5)));
    }

    #[test]
    fn zero_divisors() {
        assert_eq!(
            eval(5.into(), BinaryOp::Div, 0.into()),
            Err(RuntimeErrorKind::DivisionByZero)
        );
        assert_eq!(
            eval(5.into(), BinaryOp::Div, 0.0.into()),
            Err(RuntimeErrorKind::DivisionByZero)
        );
        assert_eq!(
            eval(5.into(), BinaryOp::Mod, 0.into()),
            Err(RuntimeErrorKind::ModulusByZero)
        );
        // 0.5 truncates to 0.
        assert_eq!(
            eval(5.into(), BinaryOp::Mod, 0.5.into()),
            Err(RuntimeErrorKind::ModulusByZero)
        );
    }

    #[test]
    fn float_modulus_truncates() {
        assert_eq!(
            eval(7.9.into(), BinaryOp::Mod, 3.into()),
            Ok(Value::Float(1.0))
        );
        assert_eq!(
            eval((-7.5).into(), BinaryOp::Mod, 2.0.into()),
            Ok(Value::Float(-1.0))
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            eval(i64::MAX.into(), BinaryOp::Add, 1.into()),
            Err(RuntimeErrorKind::IntegerOverflow {
                operation: "addition"
            })
        );
        assert_eq!(
            eval(i64::MIN.into(), BinaryOp::Mod, (-1).into()),
            Err(RuntimeErrorKind::IntegerOverflow {
                operation: "remainder"
            })
        );
    }

    #[test]
    fn string_concatenation_needs_two_strings() {
        assert_eq!(
            eval("map".into(), BinaryOp::Add, ".wxx".into()),
            Ok(Value::string("map.wxx"))
        );
        assert_eq!(
            eval("n=".into(), BinaryOp::Add, 1.into()),
            Err(RuntimeErrorKind::AddTypeMismatch)
        );
        assert_eq!(
            eval(Value::Null, BinaryOp::Add, Value::Null)
                .unwrap_err()
                .to_string(),
            "type mismatch for + operator"
        );
    }

    #[test]
    fn comparisons_need_numbers() {
        assert_eq!(eval(1.into(), BinaryOp::Lt, 1.5.into()), Ok(Value::Bool(true)));
        assert_eq!(eval(2.into(), BinaryOp::GtEq, 2.into()), Ok(Value::Bool(true)));
        assert_eq!(
            eval("a".into(), BinaryOp::Lt, "b".into())
                .unwrap_err()
                .to_string(),
            "< operator requires numbers"
        );
        assert_eq!(
            eval(true.into(), BinaryOp::Mod, 1.into())
                .unwrap_err()
                .to_string(),
            "% operator requires numbers"
        );
    }

    #[test]
    fn equality_never_fails() {
        assert_eq!(eval(1.into(), BinaryOp::Eq, 1.0.into()), Ok(Value::Bool(false)));
        assert_eq!(
            eval(Value::Null, BinaryOp::NotEq, "x".into()),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            eval(Value::Null, BinaryOp::Eq, Value::Null),
            Ok(Value::Bool(true))
        );
    }
}
