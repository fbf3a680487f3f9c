//! Tree-walking evaluator for rulang.
//!
//! # Architecture
//!
//! - [`Engine`]: owns a parsed program and runs it against a [`Context`]
//! - [`Context`]: host variables, the `$val` loop slot, an optional
//!   [`DomainModel`] and a [`LogHandler`]
//! - `interpreter`: statement and expression walking; every write goes
//!   through a single place-resolution path
//! - [`operators`]: arithmetic, comparison and combinator semantics on [`Value`]
//! - [`Builtin`]: the fixed function table (`MAX`, `MIN`, `ABS`, `CEIL`,
//!   `FLOOR`, `LOG`, `APPEND`, `GETNODE`, `GETLINK`)

mod builtins;
mod context;
mod engine;
pub mod errors;
mod interpreter;
pub mod log_handler;
mod model;
pub mod operators;
mod value;

pub use builtins::Builtin;
pub use context::{Context, LOOP_VALUE_NAME};
pub use engine::Engine;
pub use errors::{EvalError, EvalResult};
pub use log_handler::{
    buffer_handler, callback_handler, silent_handler, tracing_handler, BufferLogHandler,
    LogCallback, LogHandler, SharedLogHandler, LOG_TARGET,
};
pub use model::{DomainModel, InMemoryModel};
pub use value::Value;

#[cfg(test)]
mod tests;
