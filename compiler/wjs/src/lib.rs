//! WJS: a small embedded scripting language for reading and editing map
//! data.
//!
//! This crate ties the pipeline together for hosts:
//!
//! ```text
//! source ─► wjs_lexer ─► wjs_parse ─► check_valid ─► wjs_eval::Interpreter
//! ```
//!
//! The interpreter and its collaborators (print handler, map I/O) are built
//! by the host and passed in, so one interpreter can run several sources
//! against the same globals.

mod error;
mod logging;
mod options;
mod pipeline;
mod timeout;

pub use error::ScriptError;
pub use logging::init_tracing;
pub use options::ExecOptions;
pub use pipeline::{compile, read_script, run_script_file, run_source};
pub use timeout::run_with_timeout;

pub use wjs_eval::{
    buffer_handler, map_io_fn, silent_handler, stdout_handler, Arity, Interpreter,
    InterpreterBuilder, MapIo, MapIoError, MapValue, RuntimeError, RuntimeErrorKind,
    SharedPrintHandler, UnsupportedMapIo, Value,
};
pub use wjs_ir::{Position, Program};
pub use wjs_parse::ParseError;
