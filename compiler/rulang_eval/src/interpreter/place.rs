//! Assignable locations.
//!
//! Every write (`=`, `+=`, `-=`, `APPEND`) goes through here in two phases:
//! evaluate the index expressions of the path into [`PathKey`]s, then walk
//! the context mutably. Nothing is evaluated while a mutable borrow into the
//! context is live, and outer containers are updated in place.

use rulang_ir::{format_number, AssignOp, Expr, PathStep, Reference};

use super::Interpreter;
use crate::errors::{index_out_of_range, type_mismatch, unbound_variable, EvalResult};
use crate::operators::arith;
use crate::Value;

static ABSENT: Value = Value::Absent;

/// One resolved path step.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum PathKey {
    /// `.name`
    Field(String),
    /// `[value]`
    Index(Value),
}

impl PathKey {
    fn describe(&self) -> String {
        match self {
            PathKey::Field(name) => format!("`.{name}`"),
            PathKey::Index(value) => format!("`[{value}]`"),
        }
    }

    /// Key into a map: field names, strings, or numbers in display form.
    fn map_key(&self) -> EvalResult<String> {
        match self {
            PathKey::Field(name) => Ok(name.clone()),
            PathKey::Index(Value::Str(key)) => Ok(key.clone()),
            PathKey::Index(Value::Number(n)) => Ok(format_number(*n)),
            PathKey::Index(other) => Err(type_mismatch(
                "map key",
                "string or number",
                other.type_name(),
            )),
        }
    }

    /// Index into a list; `len` itself is allowed when `allow_end` is set.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "checked non-negative and integral; saturates far beyond any list length"
    )]
    fn list_position(&self, len: usize, allow_end: bool) -> EvalResult<usize> {
        let n = match self {
            PathKey::Index(Value::Number(n)) => *n,
            PathKey::Index(other) => {
                return Err(type_mismatch("list index", "number", other.type_name()))
            }
            PathKey::Field(_) => return Err(type_mismatch(&self.describe(), "map", "list")),
        };
        if n.fract() != 0.0 || n < 0.0 {
            return Err(index_out_of_range(n, len));
        }
        let position = usize::try_from(n as u64).unwrap_or(usize::MAX);
        let in_range = if allow_end {
            position <= len
        } else {
            position < len
        };
        if in_range {
            Ok(position)
        } else {
            Err(index_out_of_range(n, len))
        }
    }

    /// Step into `container` for reading. A missing map field is `Absent`.
    pub(super) fn read<'v>(&self, container: &'v Value) -> EvalResult<&'v Value> {
        match container {
            Value::Map(entries) => Ok(entries.get(&self.map_key()?).unwrap_or(&ABSENT)),
            Value::List(items) => Ok(&items[self.list_position(items.len(), false)?]),
            other => Err(type_mismatch(
                &self.describe(),
                "map or list",
                other.type_name(),
            )),
        }
    }

    /// Step into `container` for writing further down the path.
    fn step_mut<'v>(&self, container: &'v mut Value) -> EvalResult<&'v mut Value> {
        match container {
            Value::Map(entries) => {
                let key = self.map_key()?;
                entries
                    .get_mut(&key)
                    .ok_or_else(|| type_mismatch(&self.describe(), "existing field", "absent"))
            }
            Value::List(items) => {
                let position = self.list_position(items.len(), false)?;
                Ok(&mut items[position])
            }
            other => Err(type_mismatch(
                &self.describe(),
                "map or list",
                other.type_name(),
            )),
        }
    }

    /// Apply `op` at this final step of a path.
    fn assign(&self, container: &mut Value, op: AssignOp, value: Value) -> EvalResult<()> {
        match container {
            Value::Map(entries) => {
                let key = self.map_key()?;
                let value = match op.arith() {
                    None => value,
                    Some(arith_op) => {
                        arith(arith_op, entries.get(&key).unwrap_or(&ABSENT), &value)?
                    }
                };
                entries.insert(key, value);
                Ok(())
            }
            Value::List(items) => {
                let position = self.list_position(items.len(), op == AssignOp::Assign)?;
                if position == items.len() {
                    items.push(value);
                    return Ok(());
                }
                let slot = &mut items[position];
                *slot = match op.arith() {
                    None => value,
                    Some(arith_op) => arith(arith_op, slot, &value)?,
                };
                Ok(())
            }
            other => Err(type_mismatch(
                &self.describe(),
                "map or list",
                other.type_name(),
            )),
        }
    }
}

impl Interpreter<'_> {
    /// Phase one: evaluate every index expression along a path.
    pub(super) fn resolve_keys(&mut self, steps: &[PathStep]) -> EvalResult<Vec<PathKey>> {
        let mut keys = Vec::with_capacity(steps.len());
        for step in steps {
            keys.push(match step {
                PathStep::Field(ident) => PathKey::Field(ident.name.clone()),
                PathStep::Index(access) => PathKey::Index(self.eval_expr(&access.index)?),
            });
        }
        Ok(keys)
    }

    /// Phase two: mutable walk from a context binding through `keys`.
    fn walk_mut(&mut self, base: &str, keys: &[PathKey]) -> EvalResult<&mut Value> {
        let mut slot = self
            .ctx
            .lookup_mut(base)
            .ok_or_else(|| unbound_variable(base))?;
        for key in keys {
            slot = key.step_mut(slot)?;
        }
        Ok(slot)
    }

    /// Store `value` at `target` according to `op`.
    pub(super) fn write_place(
        &mut self,
        target: &Reference,
        op: AssignOp,
        value: Value,
    ) -> EvalResult<()> {
        match target {
            Reference::Identifier(ident) => {
                let value = match op.arith() {
                    None => value,
                    Some(arith_op) => arith(arith_op, self.read_variable(&ident.name)?, &value)?,
                };
                self.ctx.bind(&ident.name, value);
                Ok(())
            }
            Reference::Property(access) => {
                let keys = self.resolve_keys(&access.steps)?;
                let Some((last, parents)) = keys.split_last() else {
                    let base = Reference::Identifier(access.base.clone());
                    return self.write_place(&base, op, value);
                };
                let container = self.walk_mut(&access.base.name, parents)?;
                last.assign(container, op, value)
            }
        }
    }

    /// `APPEND(target, item)`: push onto the list `target` refers to.
    pub(super) fn append(&mut self, target: &Expr, item: &Expr) -> EvalResult<()> {
        let (base, steps) = match target {
            Expr::Identifier(ident) => (ident.name.as_str(), &[] as &[PathStep]),
            Expr::Property(access) => (access.base.name.as_str(), access.steps.as_slice()),
            _ => return Err(type_mismatch("APPEND", "reference to a list", "expression")),
        };

        let item = self.eval_expr(item)?;
        let keys = self.resolve_keys(steps)?;
        match self.walk_mut(base, &keys)? {
            Value::List(items) => {
                items.push(item);
                Ok(())
            }
            other => Err(type_mismatch("APPEND", "list", other.type_name())),
        }
    }
}
