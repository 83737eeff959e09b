//! Global variable bindings.
//!
//! WJS has a single flat scope. `let` defines or rebinds a name; plain
//! assignment only updates a name that already exists.

use crate::{RuntimeErrorKind, Value};
use rustc_hash::FxHashMap;

/// The global scope of one interpreter.
#[derive(Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Look up a binding, failing with `undefined variable` when absent.
    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeErrorKind::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Update an existing binding.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeErrorKind> {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeErrorKind::UndefinedVariable {
                name: name.to_string(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_overwrites() {
        let mut env = Environment::new();
        env.define("x", Value::Int(1));
        env.define("x", Value::string("two"));
        assert_eq!(env.get("x"), Some(&Value::string("two")));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn assign_requires_existing_binding() {
        let mut env = Environment::new();
        assert_eq!(
            env.assign("y", Value::Int(1)),
            Err(RuntimeErrorKind::UndefinedVariable {
                name: "y".to_string()
            })
        );
        assert!(!env.contains("y"));

        env.define("y", Value::Null);
        assert_eq!(env.assign("y", Value::Int(1)), Ok(()));
        assert_eq!(env.lookup("y"), Ok(Value::Int(1)));
    }

    #[test]
    fn lookup_missing_name() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(
            env.lookup("nope").map_err(|e| e.to_string()),
            Err("undefined variable: nope".to_string())
        );
    }

    #[test]
    fn names_are_sorted() {
        let mut env = Environment::new();
        env.define("save", Value::Null);
        env.define("load", Value::Null);
        env.define("print", Value::Null);
        assert_eq!(env.names(), vec!["load", "print", "save"]);
    }
}
