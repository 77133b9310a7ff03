//! Stack growth for deeply nested scripts.
//!
//! The reader, the evaluator and the recursive `Value` impls (`Clone`,
//! `PartialEq`, `Display`) each take one native frame per level of paren
//! nesting. Scripts come from configuration, so a request worker can be
//! handed an arbitrarily deep tree; every one of those recursions goes
//! through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended in heap-allocated segments via
//! `stacker`. On `wasm32` the closure runs as is.

/// Headroom that must remain before recursing further.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each segment added once the headroom runs out.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if fewer than
/// `MIN_REMAINING` bytes are left.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
    }
    #[cfg(target_arch = "wasm32")]
    {
        f()
    }
}
