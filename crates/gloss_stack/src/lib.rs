//! Stack safety utilities for deep recursion.
//!
//! Lowering and layout both recurse to the depth of the input value graph.
//! Cycle-breaking guarantees the recursion terminates, but not that it is
//! shallow: a deeply nested but acyclic value can still exhaust the call
//! stack. Wrapping each recursive step in [`ensure_sufficient_stack`] grows
//! the stack on demand instead.
//!
//! # Platform Support
//!
//! - **Native targets**: uses the `stacker` crate to grow the stack.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).
//!
//! # Usage
//!
//! ```text
//! fn lower(&mut self, value: &Value) -> Doc {
//!     ensure_sufficient_stack(|| {
//!         // ... recurse into children ...
//!     })
//! }
//! ```

/// Minimum stack space to keep available (100KB red zone).
///
/// If less than this amount remains, we'll grow the stack.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`, so deeply nested values cannot
/// overflow the call stack.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_recursion_is_unaffected() {
        fn sum_to(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
        }

        assert_eq!(sum_to(10), 55);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        // Mimics lowering a value nested 100k levels deep, which would
        // overflow a typical 8MB stack without growth.
        fn nesting_depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nesting_depth(n - 1) + 1 })
        }

        assert_eq!(nesting_depth(100_000), 100_000);
    }

    #[test]
    fn returns_the_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| "ok"), "ok");
    }
}
