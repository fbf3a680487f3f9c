//! Stack safety for recursive parsing and evaluation.
//!
//! Rule programs nest through parenthesized conditions, nested calls and
//! index expressions. Parser and engine entry points that recurse on that
//! nesting wrap themselves in [`ensure_sufficient_stack`], which grows the
//! native stack on demand instead of overflowing.
//!
//! - **Red zone**: 64KB. Below this much remaining stack, grow.
//! - **Growth size**: 1MB per growth.

const RED_ZONE: usize = 64 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
