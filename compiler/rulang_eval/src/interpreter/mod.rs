//! Tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: statements, branches and loops
//! - `eval.rs`: expression evaluation and property reads
//! - `call.rs`: built-in dispatch
//! - `place.rs`: the single write path for assignments and `APPEND`
//! - `loop_scope.rs`: guard that restores the loop slot

mod call;
mod eval;
mod loop_scope;
mod place;

use rulang_ir::{EachSource, ForLoop, LoopKind, Sequence, Stmt};
use rulang_stack::ensure_sufficient_stack;

use crate::errors::{type_mismatch, EvalResult};
use crate::{Context, Value};

/// Walks a program against a borrowed context.
///
/// The tree is only ever read; all mutation lands in `ctx`.
pub(crate) struct Interpreter<'c> {
    ctx: &'c mut Context,
}

impl<'c> Interpreter<'c> {
    pub(crate) fn new(ctx: &'c mut Context) -> Self {
        Interpreter { ctx }
    }

    /// Run a whole program. The loop slot starts empty and is put back
    /// afterwards, so a top-level write to `$val` does not outlive the run.
    pub(crate) fn exec_program(&mut self, program: &Sequence) -> EvalResult<()> {
        let mut scope = self.loop_scope();
        scope.exec_sequence(program)
    }

    /// Run statements in order, stopping at the first fault.
    fn exec_sequence(&mut self, sequence: &Sequence) -> EvalResult<()> {
        for stmt in sequence.iter() {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Operation(operation) => {
                let value = self.eval_expr(&operation.value)?;
                self.write_place(&operation.target, operation.op, value)
            }
            Stmt::Branch(branch) => {
                if self.eval_expr(&branch.condition)?.is_truthy() {
                    self.exec_sequence(&branch.then_body)
                } else if let Some(else_body) = &branch.else_body {
                    self.exec_sequence(else_body)
                } else {
                    Ok(())
                }
            }
            Stmt::ForLoop(for_loop) => self.exec_for_loop(for_loop),
            Stmt::Call(call) => self.eval_call(call).map(drop),
        }
    }

    fn exec_for_loop(&mut self, for_loop: &ForLoop) -> EvalResult<()> {
        match &for_loop.kind {
            LoopKind::Counted(count) => {
                let count = self.eval_expr(count)?;
                let Value::Number(n) = count else {
                    return Err(type_mismatch(
                        "loop count",
                        "number",
                        count.type_name(),
                    ));
                };
                if !(n.is_finite() && n > 0.0) {
                    return Ok(());
                }

                let mut scope = self.loop_scope();
                // Runs ceil(n) times.
                let mut index = 0.0;
                while index < n {
                    scope.bind_loop_value(Value::Number(index));
                    scope.exec_sequence(&for_loop.body)?;
                    index += 1.0;
                }
                Ok(())
            }
            LoopKind::EachOf(source) => {
                let items = self.each_items(source)?;
                tracing::trace!(items = items.len(), "for each");

                let mut scope = self.loop_scope();
                for item in items {
                    scope.bind_loop_value(item);
                    scope.exec_sequence(&for_loop.body)?;
                }
                Ok(())
            }
        }
    }

    /// Snapshot of the elements an each-loop visits.
    fn each_items(&mut self, source: &EachSource) -> EvalResult<Vec<Value>> {
        match source {
            EachSource::Literal(items) => Ok(items.iter().map(Value::from).collect()),
            EachSource::Reference(reference) => match self.eval_reference(reference)? {
                Value::List(items) => Ok(items),
                Value::Map(entries) => Ok(entries.into_values().collect()),
                other => Err(type_mismatch(
                    "`for each`",
                    "list or map",
                    other.type_name(),
                )),
            },
        }
    }
}
