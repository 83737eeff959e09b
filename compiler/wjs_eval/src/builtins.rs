//! The built-ins every interpreter starts with: `print`, `load`, `save`.

use crate::{
    Arity, Builtin, Environment, MapIo, RuntimeErrorKind, SharedPrintHandler, Value,
};
use std::rc::Rc;

/// Bind all default built-ins into `env`.
pub(crate) fn register(env: &mut Environment, print: SharedPrintHandler, map_io: &Rc<dyn MapIo>) {
    env.define("print", print_builtin(print));
    env.define("load", load_builtin(Rc::clone(map_io)));
    env.define("save", save_builtin(Rc::clone(map_io)));
}

/// `print(...values)`: one line, arguments stringified and joined by a
/// space. Returns null.
pub(crate) fn print_builtin(handler: SharedPrintHandler) -> Value {
    let builtin = Builtin::new("print", Arity::Variadic, move |args| {
        let line = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        handler.write_line(&line);
        Ok(Value::Null)
    });
    Value::Callable(Rc::new(builtin))
}

/// `load(path)`: ask the map I/O collaborator for a map.
fn load_builtin(map_io: Rc<dyn MapIo>) -> Value {
    let builtin = Builtin::new("load", Arity::Fixed(1), move |args| {
        let Some(path) = args[0].as_str() else {
            return Err(RuntimeErrorKind::LoadPathNotString);
        };
        tracing::debug!(path, "load");
        map_io
            .load(path)
            .map(Value::Map)
            .map_err(RuntimeErrorKind::Load)
    });
    Value::Callable(Rc::new(builtin))
}

/// `save(map, path)`: hand a map back to the collaborator. The path is
/// checked before the map.
fn save_builtin(map_io: Rc<dyn MapIo>) -> Value {
    let builtin = Builtin::new("save", Arity::Fixed(2), move |args| {
        let Some(path) = args[1].as_str() else {
            return Err(RuntimeErrorKind::SavePathNotString);
        };
        let Value::Map(map) = &args[0] else {
            return Err(RuntimeErrorKind::SaveTargetNotMap);
        };
        tracing::debug!(path, "save");
        map_io
            .save(map, path)
            .map(|()| Value::Null)
            .map_err(RuntimeErrorKind::Save)
    });
    Value::Callable(Rc::new(builtin))
}
