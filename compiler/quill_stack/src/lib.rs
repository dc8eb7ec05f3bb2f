//! Stack growth for recursive passes over user-written expressions.
//!
//! The parser and the expression checker recurse once per nesting level, and
//! nesting depth is chosen by whoever wrote the source: `((((1))))` or
//! `----1` can be thousands of levels deep. Wrapping the recursive entry
//! points in [`ensure_sufficient_stack`] moves the rest of the recursion onto
//! a fresh heap-allocated segment whenever the current stack runs low.
//!
//! ```text
//! fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
//!     ensure_sufficient_stack(|| self.parse_additive())
//! }
//! ```

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const GROW_BY: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

/// wasm manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
