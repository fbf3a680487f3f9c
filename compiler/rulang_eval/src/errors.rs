//! Evaluation errors.
//!
//! Constructors are `#[cold]` free functions so call sites read as
//! `return Err(unbound_variable(name))`.

use thiserror::Error;

/// Result of evaluating something.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// A runtime fault. The first one aborts the whole `execute` call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: String,
        found: String,
    },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: f64, len: usize },

    #[error("`{name}` expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("missing capability: {capability}")]
    MissingCapability { capability: String },
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::UnboundVariable {
        name: name.to_string(),
    }
}

/// `found` is the runtime type name of the offending value.
#[cold]
pub fn type_mismatch(context: &str, expected: &str, found: &str) -> EvalError {
    EvalError::TypeMismatch {
        context: context.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::UnknownFunction {
        name: name.to_string(),
    }
}

#[cold]
pub fn index_out_of_range(index: f64, len: usize) -> EvalError {
    EvalError::IndexOutOfRange { index, len }
}

#[cold]
pub fn arity_mismatch(name: &str, expected: &str, found: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        found,
    }
}

#[cold]
pub fn missing_capability(capability: &str) -> EvalError {
    EvalError::MissingCapability {
        capability: capability.to_string(),
    }
}
