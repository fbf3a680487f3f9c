//! RAII guard for the loop slot.
//!
//! Entering a loop stashes the enclosing loop value; dropping the guard puts
//! it back, on normal exit and on an early `?` return alike. At top level the
//! stashed value is `None`, so the slot is left empty.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Value;

pub(super) struct LoopScope<'guard, 'c> {
    interpreter: &'guard mut Interpreter<'c>,
    saved: Option<Value>,
}

impl<'c> Interpreter<'c> {
    pub(super) fn loop_scope(&mut self) -> LoopScope<'_, 'c> {
        let saved = self.ctx.replace_loop_value(None);
        LoopScope {
            interpreter: self,
            saved,
        }
    }
}

impl LoopScope<'_, '_> {
    pub(super) fn bind_loop_value(&mut self, value: Value) {
        self.interpreter.ctx.replace_loop_value(Some(value));
    }
}

impl Drop for LoopScope<'_, '_> {
    fn drop(&mut self) {
        let saved = self.saved.take();
        self.interpreter.ctx.replace_loop_value(saved);
    }
}

impl<'c> Deref for LoopScope<'_, 'c> {
    type Target = Interpreter<'c>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for LoopScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}
