//! Tree-walking interpreter for WJS.
//!
//! One interpreter owns one global [`Environment`]. `execute` runs the
//! statements of a program in order and stops at the first runtime error.
//! Evaluation is strictly left to right: operands, then the operator; callee,
//! then arguments, then the call. For assignments the value is evaluated
//! before the target.
//!
//! Runtime errors carry the position of the node that failed. Binary and
//! postfix nodes are positioned at their operator token, so `5 / 0` reports
//! the column of `/`.

mod builder;
mod expr;

pub use builder::InterpreterBuilder;

use crate::{
    builtins, Arity, Builtin, Environment, MapIo, RuntimeError, RuntimeErrorKind,
    SharedPrintHandler, Value,
};
use std::rc::Rc;
use std::sync::Arc;
use tracing::trace;
use wjs_ir::{Expr, ExprKind, Program, Stmt, StmtKind};

/// Interpreter state for one script.
///
/// Not `Send`: values share containers through `Rc`. A host that wants a
/// deadline builds the interpreter on the worker thread.
pub struct Interpreter {
    script: Arc<str>,
    env: Environment,
    print: SharedPrintHandler,
    map_io: Rc<dyn MapIo>,
}

impl Interpreter {
    /// Interpreter with the given map I/O and output on stdout.
    pub fn new(script: impl Into<Arc<str>>, map_io: impl MapIo + 'static) -> Self {
        InterpreterBuilder::new(script).map_io(map_io).build()
    }

    pub fn builder(script: impl Into<Arc<str>>) -> InterpreterBuilder {
        InterpreterBuilder::new(script)
    }

    /// Redirect `print`. Rebinds the `print` built-in to the new handler.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.env
            .define("print", builtins::print_builtin(Arc::clone(&handler)));
        self.print = handler;
        self
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    pub fn map_io(&self) -> &dyn MapIo {
        &*self.map_io
    }

    pub fn script_name(&self) -> &str {
        &self.script
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Bind a global before (or between) executions.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.env.define(name, value);
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.env.get(name).cloned()
    }

    /// Bind a host function as a callable global.
    pub fn define_builtin(
        &mut self,
        name: &str,
        arity: Arity,
        func: impl Fn(Vec<Value>) -> Result<Value, RuntimeErrorKind> + 'static,
    ) {
        let builtin = Builtin::new(name, arity, func);
        self.env.define(name, Value::Callable(Rc::new(builtin)));
    }

    /// Run every statement of `program`.
    ///
    /// Returns the value of the last statement that produced a non-null
    /// value, or null. `let` statements produce nothing; assignments produce
    /// the assigned value.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(script = %self.script, statements = program.len())
    )]
    pub fn execute(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let mut last = Value::Null;
        for stmt in &program.statements {
            trace!(line = stmt.pos.line, column = stmt.pos.column, "statement");
            if let Some(value) = self.exec_stmt(stmt)? {
                if !value.is_null() {
                    last = value;
                }
            }
        }
        Ok(last)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Option<Value>, RuntimeError> {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.define(name.name.as_str(), value);
                Ok(None)
            }
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.assign(target, value.clone())?;
                Ok(Some(value))
            }
            StmtKind::Expr(expr) => self.eval_expr(expr).map(Some),
        }
    }

    /// Store `value` through an identifier, member or index target.
    fn assign(&mut self, target: &Expr, value: Value) -> Result<(), RuntimeError> {
        match &target.kind {
            ExprKind::Ident(name) => self
                .env
                .assign(name, value)
                .map_err(|kind| kind.at(&target.pos)),
            ExprKind::Member { object, field } => match self.eval_expr(object)? {
                Value::Object(map) => {
                    map.borrow_mut().insert(field.name.clone(), value);
                    Ok(())
                }
                other => Err(RuntimeErrorKind::MemberAssignTarget {
                    type_name: other.type_name(),
                }
                .at(&target.pos)),
            },
            ExprKind::Index {
                target: container,
                index,
            } => {
                let container = self.eval_expr(container)?;
                let index = self.eval_expr(index)?;
                match container {
                    Value::Array(items) => {
                        let mut items = items.borrow_mut();
                        let slot = expr::array_index(&index, items.len())
                            .map_err(|kind| kind.at(&target.pos))?;
                        items[slot] = value;
                        Ok(())
                    }
                    Value::Object(map) => {
                        let Some(key) = index.as_str() else {
                            return Err(RuntimeErrorKind::ObjectKeyNotString.at(&target.pos));
                        };
                        map.borrow_mut().insert(key.to_string(), value);
                        Ok(())
                    }
                    other => Err(RuntimeErrorKind::IndexAssignTarget {
                        type_name: other.type_name(),
                    }
                    .at(&target.pos)),
                }
            }
            _ => Err(RuntimeErrorKind::InvalidAssignmentTarget.at(&target.pos)),
        }
    }
}
