//! One error type for the whole pipeline.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use wjs_eval::RuntimeError;
use wjs_ir::{Position, ValidationError};
use wjs_parse::ParseError;

/// Anything that can stop a script, from reading the file to running it.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("parse error at {}: {}", .0.pos, .0.kind)]
    Parse(#[from] ParseError),

    #[error("invalid program at {}: {}", .0.pos, .0.kind)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot start script worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("script timed out after {0:?}")]
    Timeout(Duration),

    /// The worker thread ended without reporting, which means it panicked.
    #[error("script worker stopped without a result")]
    Aborted,
}

impl ScriptError {
    /// Source position of the failure, when there is one.
    pub fn pos(&self) -> Option<&Position> {
        match self {
            ScriptError::Parse(err) => Some(&err.pos),
            ScriptError::Validation(err) => Some(&err.pos),
            ScriptError::Runtime(err) => Some(&err.pos),
            ScriptError::Io { .. }
            | ScriptError::Spawn(_)
            | ScriptError::Timeout(_)
            | ScriptError::Aborted => None,
        }
    }
}
