//! Stringification, as used by `print` and template interpolation.
//!
//! Strings print bare, floats print in shortest round-trip form without a
//! forced `.0`, containers print their elements recursively. A container
//! that is already being printed further up shows as `[...]` or `{...}`.

use super::Value;
use std::fmt::{self, Write};
use std::rc::Rc;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, open: &mut Vec<*const ()>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(x) => write!(f, "{x}"),
        Value::Str(s) => f.write_str(s),
        Value::Array(items) => {
            let id = Rc::as_ptr(items).cast::<()>();
            if open.contains(&id) {
                return f.write_str("[...]");
            }
            open.push(id);
            f.write_char('[')?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item, open)?;
            }
            open.pop();
            f.write_char(']')
        }
        Value::Object(map) => {
            let id = Rc::as_ptr(map).cast::<()>();
            if open.contains(&id) {
                return f.write_str("{...}");
            }
            open.push(id);
            f.write_char('{')?;
            for (i, (key, item)) in map.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_value(f, item, open)?;
            }
            open.pop();
            f.write_char('}')
        }
        Value::Callable(builtin) => write!(f, "<builtin {}>", builtin.name()),
        Value::Map(_) => f.write_str("<map>"),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Array(_) => write!(f, "Array({self})"),
            Value::Object(_) => write!(f, "Object({self})"),
            Value::Callable(builtin) => write!(f, "Callable({})", builtin.name()),
            Value::Map(_) => f.write_str("Map"),
        }
    }
}
