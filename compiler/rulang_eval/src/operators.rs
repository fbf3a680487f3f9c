//! Arithmetic, comparison and combinator semantics on [`Value`]s.

use std::cmp::Ordering;

use rulang_ir::{format_number, ArithOp, Combinator, CompareOp};

use crate::errors::{type_mismatch, EvalResult};
use crate::Value;

/// Apply an arithmetic operator.
///
/// Numbers follow IEEE-754 (`/` is float division, `x / 0` is infinite).
/// `+` with a string on either side concatenates display forms.
pub fn arith(op: ArithOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(match op {
            ArithOp::Add => l + r,
            ArithOp::Sub => l - r,
            ArithOp::Mul => l * r,
            ArithOp::Div => l / r,
        })),
        (Value::Str(_), _) | (_, Value::Str(_)) if op == ArithOp::Add => {
            Ok(Value::Str(format!("{left}{right}")))
        }
        (Value::Number(_), other) | (other, _) => Err(type_mismatch(
            &format!("`{}`", op.as_symbol()),
            "number",
            other.type_name(),
        )),
    }
}

/// Ordering of two numbers or two strings; `None` when the numbers are
/// unordered (NaN).
pub fn ordering(context: &str, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(l.partial_cmp(r)),
        (Value::Str(l), Value::Str(r)) => Ok(Some(l.cmp(r))),
        (Value::Number(_) | Value::Str(_), other) => Err(type_mismatch(
            context,
            left.type_name(),
            other.type_name(),
        )),
        (other, _) => Err(type_mismatch(context, "number or string", other.type_name())),
    }
}

/// Evaluate a comparison.
pub fn compare(op: CompareOp, left: &Value, right: &Value) -> EvalResult<bool> {
    let context = format!("`{}`", op.as_symbol());
    let result = match op {
        CompareOp::Eq => left == right,
        CompareOp::NotEq => left != right,
        CompareOp::Lt => ordering(&context, left, right)? == Some(Ordering::Less),
        CompareOp::LtEq => matches!(
            ordering(&context, left, right)?,
            Some(Ordering::Less | Ordering::Equal)
        ),
        CompareOp::Gt => ordering(&context, left, right)? == Some(Ordering::Greater),
        CompareOp::GtEq => matches!(
            ordering(&context, left, right)?,
            Some(Ordering::Greater | Ordering::Equal)
        ),
        CompareOp::In => contains(right, left)?,
    };
    Ok(result)
}

/// `needle in haystack`: list element, map key, or substring.
fn contains(haystack: &Value, needle: &Value) -> EvalResult<bool> {
    match haystack {
        Value::List(items) => Ok(items.contains(needle)),
        Value::Map(entries) => Ok(match needle {
            Value::Str(key) => entries.contains_key(key),
            Value::Number(n) => entries.contains_key(&format_number(*n)),
            _ => false,
        }),
        Value::Str(text) => Ok(text.contains(&needle.to_string())),
        other => Err(type_mismatch(
            "`in`",
            "list, map or string",
            other.type_name(),
        )),
    }
}

/// Join two already-evaluated operands. `A not B` is `A and not B`.
pub fn combine(combinator: Combinator, left: &Value, right: &Value) -> bool {
    let (l, r) = (left.is_truthy(), right.is_truthy());
    match combinator {
        Combinator::And => l && r,
        Combinator::Or => l || r,
        Combinator::Not => l && !r,
    }
}

#[cfg(test)]
mod tests;
