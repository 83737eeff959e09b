//! Structural equality, the semantics of `==` and `!=`.
//!
//! Defined for every pair of values. Different variants are never equal, so
//! `1 == 1.0` is false. Arrays compare element-wise, objects key-wise.
//! Builtins and maps compare by identity.

use super::Value;
use std::rc::Rc;

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other, &mut Vec::new())
    }
}

/// `visiting` holds container pairs already under comparison. Meeting one
/// again means a cycle; it is assumed equal and the rest of the structure
/// decides.
#[allow(clippy::float_cmp)]
fn values_equal(a: &Value, b: &Value, visiting: &mut Vec<(*const (), *const ())>) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Rc::as_ptr(x).cast::<()>(), Rc::as_ptr(y).cast::<()>());
            if visiting.contains(&pair) {
                return true;
            }
            let (xs, ys) = (x.borrow(), y.borrow());
            if xs.len() != ys.len() {
                return false;
            }
            visiting.push(pair);
            let equal = xs
                .iter()
                .zip(ys.iter())
                .all(|(l, r)| values_equal(l, r, visiting));
            visiting.pop();
            equal
        }
        (Value::Object(x), Value::Object(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Rc::as_ptr(x).cast::<()>(), Rc::as_ptr(y).cast::<()>());
            if visiting.contains(&pair) {
                return true;
            }
            let (xs, ys) = (x.borrow(), y.borrow());
            if xs.len() != ys.len() {
                return false;
            }
            visiting.push(pair);
            let equal = xs.iter().all(|(key, l)| match ys.get(key) {
                Some(r) => values_equal(l, r, visiting),
                None => false,
            });
            visiting.pop();
            equal
        }
        (Value::Callable(x), Value::Callable(y)) => Rc::ptr_eq(x, y),
        (Value::Map(x), Value::Map(y)) => x.ptr_eq(y),
        _ => false,
    }
}
