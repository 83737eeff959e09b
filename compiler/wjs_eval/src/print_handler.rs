//! Where `print` output goes.
//!
//! Scripts always write whole lines. The host picks the destination when it
//! builds the interpreter: stdout for the command line, a buffer for tests
//! and embedding, or nowhere at all.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Line sink used by the `print` built-in.
pub enum PrintHandler {
    /// Writes to the process stdout (default).
    Stdout,
    /// Accumulates lines in memory.
    Buffer(Mutex<String>),
    /// Drops everything.
    Silent,
}

impl PrintHandler {
    /// Write `line` followed by a newline.
    ///
    /// Stdout write failures (a closed pipe, say) are ignored; a script has
    /// no way to react to them.
    pub fn write_line(&self, line: &str) {
        match self {
            PrintHandler::Stdout => {
                let mut out = std::io::stdout().lock();
                if writeln!(out, "{line}").is_err() {
                    tracing::trace!("stdout closed, print output dropped");
                }
            }
            PrintHandler::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => buf.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Return the captured output and reset the buffer.
    pub fn take_output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => std::mem::take(&mut *buf.lock()),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

/// Print handler shared between the interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// A capturing handler. Keep a clone to read the output back.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
