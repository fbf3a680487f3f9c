//! Expression evaluation.

use std::collections::BTreeMap;

use rulang_ir::{BooleanGroup, Expr, ObjectNode, PropertyAccess, Reference};
use rulang_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{unbound_variable, EvalResult};
use crate::operators::{arith, combine, compare};
use crate::Value;

impl Interpreter<'_> {
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Identifier(ident) => self.read_variable(&ident.name).cloned(),
            Expr::Property(access) => self.read_property(access),
            Expr::Call(call) => self.eval_call(call),
            Expr::Object(object) => self.eval_object(object),
            Expr::Aggregate { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                arith(*op, &left, &right)
            }
            Expr::Concat(parts) => {
                let mut text = String::new();
                for part in parts {
                    let value = self.eval_expr(part)?;
                    text.push_str(&value.to_string());
                }
                Ok(Value::Str(text))
            }
            Expr::Comparison { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                compare(*op, &left, &right).map(Value::Bool)
            }
            Expr::Group(group) => self.eval_group(group),
        }
    }

    /// A lone operand passes through; a combined group evaluates both sides
    /// before joining them.
    fn eval_group(&mut self, group: &BooleanGroup) -> EvalResult {
        let left = self.eval_expr(&group.left)?;
        match (group.combinator, &group.right) {
            (Some(combinator), Some(right)) => {
                let right = self.eval_expr(right)?;
                Ok(Value::Bool(combine(combinator, &left, &right)))
            }
            _ => Ok(left),
        }
    }

    fn eval_object(&mut self, object: &ObjectNode) -> EvalResult {
        let mut entries = BTreeMap::new();
        for property in &object.properties {
            let value = self.eval_expr(&property.value)?;
            entries.insert(property.name.clone(), value);
        }
        Ok(Value::Map(entries))
    }

    /// Current value of a reference (cloned).
    pub(super) fn eval_reference(&mut self, reference: &Reference) -> EvalResult {
        match reference {
            Reference::Identifier(ident) => self.read_variable(&ident.name).cloned(),
            Reference::Property(access) => self.read_property(access),
        }
    }

    pub(super) fn read_variable(&self, name: &str) -> EvalResult<&Value> {
        self.ctx.lookup(name).ok_or_else(|| unbound_variable(name))
    }

    /// Keys first, then a read-only walk from the base.
    fn read_property(&mut self, access: &PropertyAccess) -> EvalResult {
        let keys = self.resolve_keys(&access.steps)?;
        let mut current = self.read_variable(&access.base.name)?;
        for key in &keys {
            current = key.read(current)?;
        }
        Ok(current.clone())
    }
}
