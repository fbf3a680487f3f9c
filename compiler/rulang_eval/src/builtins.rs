//! Built-in function table.
//!
//! Names resolve case-insensitively. The numeric built-ins are pure and live
//! here; `LOG`, `APPEND`, `GETNODE` and `GETLINK` touch the context and are
//! dispatched by the interpreter.

use std::cmp::Ordering;

use crate::errors::{arity_mismatch, type_mismatch, EvalResult};
use crate::operators::ordering;
use crate::Value;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Builtin {
    Max,
    Min,
    Abs,
    Ceil,
    Floor,
    Log,
    Append,
    GetNode,
    GetLink,
}

impl Builtin {
    pub const ALL: [Builtin; 9] = [
        Builtin::Max,
        Builtin::Min,
        Builtin::Abs,
        Builtin::Ceil,
        Builtin::Floor,
        Builtin::Log,
        Builtin::Append,
        Builtin::GetNode,
        Builtin::GetLink,
    ];

    /// Resolve a call name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.name().eq_ignore_ascii_case(name))
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Max => "MAX",
            Builtin::Min => "MIN",
            Builtin::Abs => "ABS",
            Builtin::Ceil => "CEIL",
            Builtin::Floor => "FLOOR",
            Builtin::Log => "LOG",
            Builtin::Append => "APPEND",
            Builtin::GetNode => "GETNODE",
            Builtin::GetLink => "GETLINK",
        }
    }

    /// Required argument count; `None` for variadic.
    pub fn arity(self) -> Option<usize> {
        match self {
            Builtin::Max | Builtin::Min => None,
            Builtin::Abs
            | Builtin::Ceil
            | Builtin::Floor
            | Builtin::Log
            | Builtin::GetNode
            | Builtin::GetLink => Some(1),
            Builtin::Append => Some(2),
        }
    }

    pub fn check_arity(self, found: usize) -> EvalResult<()> {
        match self.arity() {
            Some(expected) if expected != found => {
                Err(arity_mismatch(self.name(), &expected.to_string(), found))
            }
            _ => Ok(()),
        }
    }
}

/// `MAX`/`MIN` over evaluated arguments.
///
/// Only a strictly better candidate replaces the current one, so ties keep
/// the earliest argument. No arguments yields `Absent`.
pub fn extremum(builtin: Builtin, args: Vec<Value>) -> EvalResult {
    let wanted = if builtin == Builtin::Max {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    let context = builtin.name();

    let mut args = args.into_iter();
    let Some(mut best) = args.next() else {
        return Ok(Value::Absent);
    };
    for candidate in args {
        if ordering(context, &candidate, &best)? == Some(wanted) {
            best = candidate;
        }
    }
    Ok(best)
}

/// `ABS`, `CEIL`, `FLOOR` on a single number.
pub fn unary_numeric(builtin: Builtin, arg: &Value) -> EvalResult {
    let Value::Number(n) = arg else {
        return Err(type_mismatch(builtin.name(), "number", arg.type_name()));
    };
    let result = match builtin {
        Builtin::Abs => n.abs(),
        Builtin::Ceil => n.ceil(),
        Builtin::Floor => n.floor(),
        _ => return Err(type_mismatch(builtin.name(), "numeric built-in", "call")),
    };
    Ok(Value::Number(result))
}
