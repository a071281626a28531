//! Stack safety for deep recursion.
//!
//! Decoding and evaluation both recurse once per nested term, and evaluation
//! also recurses once per call of the interpreted program. Instead of
//! aborting on the host's fixed-size stack, recursive entry points run
//! through [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the remaining space drops below a red zone.
//! Depth limits (`max_depth` options) stay in charge of turning runaway
//! recursion into an error.

/// If less than this remains (100KB), the stack is grown.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: usize) -> usize {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        assert_eq!(depth(200_000), 200_000);
    }
}
