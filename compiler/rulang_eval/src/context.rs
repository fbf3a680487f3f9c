//! Execution context: host variables, the loop slot, the domain model and
//! the log sink.
//!
//! The loop value lives in its own slot instead of the variable map, so a
//! host variable can never collide with it. Rules read it as `$val`.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::log_handler::{tracing_handler, SharedLogHandler};
use crate::{DomainModel, Value};

/// Source name that resolves to the current loop value.
pub const LOOP_VALUE_NAME: &str = "$val";

/// Mutable state a program runs against.
///
/// ```text
/// let mut ctx = Context::new()
///     .with_var("$cost", 102)
///     .with_model(model)
///     .with_log_handler(buffer_handler());
/// ```
pub struct Context {
    vars: FxHashMap<String, Value>,
    loop_value: Option<Value>,
    model: Option<Box<dyn DomainModel>>,
    log: SharedLogHandler,
}

impl Context {
    /// Empty context logging through `tracing`.
    pub fn new() -> Self {
        Context {
            vars: FxHashMap::default(),
            loop_value: None,
            model: None,
            log: tracing_handler(),
        }
    }

    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl DomainModel + 'static) -> Self {
        self.model = Some(Box::new(model));
        self
    }

    #[must_use]
    pub fn with_log_handler(mut self, log: SharedLogHandler) -> Self {
        self.log = log;
        self
    }

    /// Bind a host variable, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Host variables in no particular order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Value bound by the innermost running loop, if any.
    pub fn loop_value(&self) -> Option<&Value> {
        self.loop_value.as_ref()
    }

    pub fn model(&self) -> Option<&dyn DomainModel> {
        self.model.as_deref()
    }

    pub fn log_handler(&self) -> &SharedLogHandler {
        &self.log
    }

    /// Resolve a source name, `$val` included.
    pub(crate) fn lookup(&self, name: &str) -> Option<&Value> {
        if name == LOOP_VALUE_NAME {
            self.loop_value.as_ref()
        } else {
            self.vars.get(name)
        }
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        if name == LOOP_VALUE_NAME {
            self.loop_value.as_mut()
        } else {
            self.vars.get_mut(name)
        }
    }

    /// Bind a source name. Writing `$val` replaces the loop slot.
    pub(crate) fn bind(&mut self, name: &str, value: Value) {
        if name == LOOP_VALUE_NAME {
            self.loop_value = Some(value);
        } else {
            self.vars.insert(name.to_string(), value);
        }
    }

    pub(crate) fn replace_loop_value(&mut self, value: Option<Value>) -> Option<Value> {
        std::mem::replace(&mut self.loop_value, value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("vars", &self.vars)
            .field("loop_value", &self.loop_value)
            .field("model", &self.model.as_ref().map(|_| "<model>"))
            .field("log", &self.log)
            .finish()
    }
}

#[cfg(test)]
mod tests;
