//! Deadline runner.
//!
//! Evaluation has no interruption points, so a deadline is enforced from
//! outside: the whole pipeline runs on a worker thread and the caller waits
//! on a channel. When the deadline passes the worker is detached, not
//! joined; it keeps running until the script ends on its own.

use crate::{run_source, ExecOptions, ScriptError};
use std::sync::mpsc;
use std::thread;
use tracing::warn;
use wjs_eval::Interpreter;

/// Run `source` on a fresh interpreter built by `make_interpreter` on the
/// worker thread, waiting at most `options.timeout` (forever when `None`).
///
/// Values cannot leave the worker, so the result is the stringified last
/// value, as `print` would show it.
pub fn run_with_timeout<F>(
    source: impl Into<String>,
    options: &ExecOptions,
    make_interpreter: F,
) -> Result<String, ScriptError>
where
    F: FnOnce() -> Interpreter + Send + 'static,
{
    let source = source.into();
    let worker_options = options.clone();
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("wjs-script".to_string())
        .spawn(move || {
            let mut interp = make_interpreter();
            let outcome =
                run_source(&mut interp, &source, &worker_options).map(|value| value.to_string());
            // The receiver is gone when the caller already timed out.
            let _ = tx.send(outcome);
        });
    if let Err(err) = spawned {
        return Err(ScriptError::Spawn(err));
    }

    match options.timeout {
        Some(limit) => match rx.recv_timeout(limit) {
            Ok(outcome) => outcome,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                warn!(?limit, "script exceeded its deadline, detaching worker");
                Err(ScriptError::Timeout(limit))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ScriptError::Aborted),
        },
        None => rx.recv().unwrap_or(Err(ScriptError::Aborted)),
    }
}
