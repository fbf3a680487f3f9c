//! Compiled program plus the entry point that runs it.

use rulang_ir::Sequence;

use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::Context;

/// A parsed program, ready to run any number of times.
///
/// The tree is immutable; every run mutates only the [`Context`] it is
/// handed. An `Engine` holds no per-run state, so one engine may serve many
/// contexts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Engine {
    program: Sequence,
}

impl Engine {
    pub fn new(program: Sequence) -> Self {
        Engine { program }
    }

    pub fn program(&self) -> &Sequence {
        &self.program
    }

    /// Run every statement against `ctx`.
    ///
    /// The first fault aborts the run. Writes made before it stay in `ctx`;
    /// the loop slot is back to what it was before the call.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = self.program.len()))]
    pub fn execute(&self, ctx: &mut Context) -> EvalResult<()> {
        Interpreter::new(ctx)
            .exec_program(&self.program)
            .inspect_err(|err| tracing::debug!(%err, "execution failed"))
    }
}

impl From<Sequence> for Engine {
    fn from(program: Sequence) -> Self {
        Engine::new(program)
    }
}
