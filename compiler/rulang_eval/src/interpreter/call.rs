//! Built-in function dispatch.

use rulang_ir::FunctionCall;

use super::Interpreter;
use crate::builtins::{extremum, unary_numeric, Builtin};
use crate::errors::{missing_capability, unknown_function, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_call(&mut self, call: &FunctionCall) -> EvalResult {
        let builtin = Builtin::from_name(&call.name).ok_or_else(|| unknown_function(&call.name))?;
        builtin.check_arity(call.args.len())?;
        tracing::trace!(function = builtin.name(), args = call.args.len(), "call");

        let args = call.args.as_slice();
        match (builtin, args) {
            (Builtin::Max | Builtin::Min, _) => {
                let values = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<EvalResult<Vec<_>>>()?;
                extremum(builtin, values)
            }
            (Builtin::Abs | Builtin::Ceil | Builtin::Floor, [arg]) => {
                let value = self.eval_expr(arg)?;
                unary_numeric(builtin, &value)
            }
            (Builtin::Log, [arg]) => {
                let value = self.eval_expr(arg)?;
                self.ctx.log_handler().log(&value);
                Ok(Value::Absent)
            }
            (Builtin::Append, [target, item]) => {
                self.append(target, item)?;
                Ok(Value::Absent)
            }
            (Builtin::GetNode | Builtin::GetLink, [arg]) => {
                let id = self.eval_expr(arg)?;
                let model = self
                    .ctx
                    .model()
                    .ok_or_else(|| missing_capability(builtin.name()))?;
                let found = if builtin == Builtin::GetNode {
                    model.node(&id)
                } else {
                    model.link(&id)
                };
                Ok(found.unwrap_or(Value::Absent))
            }
            // Arity was checked above.
            _ => Err(unknown_function(&call.name)),
        }
    }
}
