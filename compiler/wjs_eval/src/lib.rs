//! WJS evaluator: runtime values and the tree-walking interpreter.
//!
//! - `Value` and its display/equality semantics
//! - `evaluate_binary` / `evaluate_unary` operator tables
//! - `Environment`, the single global scope
//! - print handlers and the map I/O seam used by the built-ins
//! - `Interpreter`, which executes a parsed `Program`

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod map_io;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{RuntimeError, RuntimeErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use map_io::{map_io_fn, FnMapIo, MapIo, MapIoError, UnsupportedMapIo};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Arity, ArrayRef, Builtin, BuiltinFn, MapValue, ObjectRef, Value};
