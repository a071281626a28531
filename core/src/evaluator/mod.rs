//! Tree-walking evaluator for Rinha programs.
//!
//! The evaluator walks a decoded [`Term`](crate::ast::Term) tree and reduces
//! it to a [`Value`](crate::values::Value), writing `print` output to a sink.
//!
//! ## Design Principles
//!
//! - **Never panic**: ill-typed or ill-scoped programs produce an
//!   [`ExecutionError`] located at the offending term.
//! - **Stack-safe**: depth tracking turns runaway recursion into
//!   [`ResourceExceededError::StackOverflow`], and the host stack grows on
//!   demand until that limit is reached.
//! - **Value-semantics scopes**: every call runs on a copy of the caller's
//!   scope, see [`Scope`](crate::scope::Scope).
//!
//! ## Example
//!
//! ```
//! use rinha_core::{ast::{BinaryOp, TermBuilder}, evaluator::{Evaluator, EvaluatorOptions}};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let b = TermBuilder::new(&arena, "sum.rinha");
//! let program = b.program("sum", b.print(b.binary(b.int(10), BinaryOp::Add, b.int(20))));
//!
//! let mut out = Vec::new();
//! Evaluator::new(&arena, EvaluatorOptions::default(), &mut out)
//!     .run(&program)
//!     .unwrap();
//! assert_eq!(out, b"30\n");
//! ```

mod error;
mod eval;
pub mod memo;
mod operators;


pub use error::{ExecutionError, ExecutionErrorKind, ResourceExceededError, RuntimeError};
pub use eval::Evaluator;
pub use memo::MemoCache;

/// Configuration of a single evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum nesting of term evaluations (for recursion protection).
    ///
    /// Every recursive call of the interpreted program adds several levels.
    ///
    /// Default: 200_000
    pub max_depth: usize,

    /// Remember results of calls with primitive arguments.
    ///
    /// Default: true
    pub memoize: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 200_000,
            memoize: true,
        }
    }
}
