//! Runtime values.
//!
//! The value set is closed, so consumers match exhaustively. Arrays and
//! objects are shared by reference (`Rc<RefCell<..>>`): assigning through a
//! member or index target mutates the container every other holder sees.
//! There is no cycle collector; a cycle leaks, but display and equality
//! detect it and terminate.

mod display;
mod equality;

use crate::RuntimeErrorKind;
use std::any::Any;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable array storage.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable object storage. Keys are kept sorted so output is
/// deterministic.
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Array(ArrayRef),
    Object(ObjectRef),
    Callable(Rc<Builtin>),
    /// Opaque map data owned by the map I/O collaborator.
    Map(MapValue),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Object(Rc::new(RefCell::new(map)))
    }

    pub fn map<T: Any>(data: T) -> Self {
        Value::Map(MapValue::new(data))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Callable(_) => "function",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

/// Opaque host data carried through scripts by `load` and `save`.
///
/// Scripts can store and pass it around but never look inside. Clones share
/// the same data; equality is identity.
#[derive(Clone)]
pub struct MapValue(Rc<dyn Any>);

impl MapValue {
    pub fn new<T: Any>(data: T) -> Self {
        MapValue(Rc::new(data))
    }

    /// Borrow the host data if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &MapValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MapValue(..)")
    }
}

/// How many arguments a built-in accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

/// Signature of a built-in's body. Arguments arrive evaluated, left to right.
pub type BuiltinFn = dyn Fn(Vec<Value>) -> Result<Value, RuntimeErrorKind>;

/// A host-provided callable.
pub struct Builtin {
    name: String,
    arity: Arity,
    func: Box<BuiltinFn>,
}

impl Builtin {
    pub fn new(
        name: impl Into<String>,
        arity: Arity,
        func: impl Fn(Vec<Value>) -> Result<Value, RuntimeErrorKind> + 'static,
    ) -> Self {
        Builtin {
            name: name.into(),
            arity,
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Check the argument count, then run the body.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
        if let Arity::Fixed(expected) = self.arity {
            if args.len() != expected {
                return Err(RuntimeErrorKind::ArityMismatch {
                    name: self.name.clone(),
                    expected,
                    got: args.len(),
                });
            }
        }
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
