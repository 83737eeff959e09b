//! Source text to result: lex, parse, validate, execute.

use crate::{ExecOptions, ScriptError};
use std::fmt::Write;
use std::path::Path;
use tracing::debug;
use wjs_eval::{Interpreter, Value};
use wjs_ir::{check_valid, dump, Program};

/// Lex, parse and (unless disabled) validate `source`.
///
/// `script` names the source in every position; use `""` for direct
/// statements.
pub fn compile(script: &str, source: &str, options: &ExecOptions) -> Result<Program, ScriptError> {
    let tokens = wjs_lexer::tokenize(script, source);
    if options.debug {
        let mut listing = String::new();
        for token in &tokens {
            let _ = writeln!(listing, "{}: {token}", token.pos);
        }
        debug!(tokens = tokens.len(), "token stream\n{listing}");
    }

    let program = wjs_parse::parse(&tokens)?;
    if options.debug {
        debug!("syntax tree\n{}", dump(&program));
    }

    if options.validate {
        check_valid(&program)?;
    }
    Ok(program)
}

/// Compile `source` and execute it on `interp`, returning the last non-null
/// statement value.
///
/// Positions use the interpreter's script name. `options.timeout` is not
/// enforced here; see [`run_with_timeout`](crate::run_with_timeout).
#[tracing::instrument(level = "debug", skip_all, fields(script = interp.script_name()))]
pub fn run_source(
    interp: &mut Interpreter,
    source: &str,
    options: &ExecOptions,
) -> Result<Value, ScriptError> {
    let program = compile(interp.script_name(), source, options)?;
    debug!(statements = program.len(), "executing");
    Ok(interp.execute(&program)?)
}

/// Read, compile and execute a script file on `interp`.
///
/// The path, as given, names the script in positions.
pub fn run_script_file(
    interp: &mut Interpreter,
    path: &Path,
    options: &ExecOptions,
) -> Result<Value, ScriptError> {
    let source = read_script(path)?;
    let script = path.display().to_string();
    let program = compile(&script, &source, options)?;
    debug!(script, statements = program.len(), "executing file");
    Ok(interp.execute(&program)?)
}

/// Read a UTF-8 script. A leading `#!` line is blanked but its newline is
/// kept, so line numbers still match the file.
pub fn read_script(path: &Path) -> Result<String, ScriptError> {
    let mut source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    strip_shebang(&mut source);
    Ok(source)
}

fn strip_shebang(source: &mut String) {
    if source.starts_with("#!") {
        let end = source.find('\n').unwrap_or(source.len());
        source.replace_range(..end, "");
    }
}
