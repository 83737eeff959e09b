//! `InterpreterBuilder` for hosts that need more than the defaults.

use super::Interpreter;
use crate::{builtins, stdout_handler, Environment, MapIo, SharedPrintHandler, UnsupportedMapIo};
use std::rc::Rc;
use std::sync::Arc;

/// Builder for [`Interpreter`].
///
/// Defaults: empty script name, stdout output, [`UnsupportedMapIo`].
pub struct InterpreterBuilder {
    script: Arc<str>,
    print_handler: Option<SharedPrintHandler>,
    map_io: Option<Rc<dyn MapIo>>,
    env: Option<Environment>,
}

impl InterpreterBuilder {
    /// Start a builder. `script` names the source in error positions; pass
    /// `""` for direct statements.
    pub fn new(script: impl Into<Arc<str>>) -> Self {
        InterpreterBuilder {
            script: script.into(),
            print_handler: None,
            map_io: None,
            env: None,
        }
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// The collaborator behind `load` and `save`.
    #[must_use]
    pub fn map_io(mut self, map_io: impl MapIo + 'static) -> Self {
        self.map_io = Some(Rc::new(map_io));
        self
    }

    /// Start from pre-seeded bindings. Built-ins are bound on top, so a
    /// seeded `print`, `load` or `save` is replaced.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        let print = self.print_handler.unwrap_or_else(stdout_handler);
        let map_io = self
            .map_io
            .unwrap_or_else(|| Rc::new(UnsupportedMapIo) as Rc<dyn MapIo>);
        let mut env = self.env.unwrap_or_default();
        builtins::register(&mut env, Arc::clone(&print), &map_io);
        Interpreter {
            script: self.script,
            env,
            print,
            map_io,
        }
    }
}
