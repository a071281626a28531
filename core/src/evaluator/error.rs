//! Runtime evaluation errors.
//!
//! The interpreted language cannot catch anything: every error below ends
//! the evaluation of the whole program. They are still ordinary values on
//! the Rust side, so a host can report them and keep running.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the program is ill-typed or ill-scoped at the point
//!   of failure (undefined variable, type mismatch, division by zero, ...).
//!
//! - **Resource exceeded errors**: the program ran out of a resource
//!   (evaluation depth) rather than doing something wrong.

use crate::{String, ast::BinaryOp, ast::Span};

/// An evaluation failure, located at the term that caused it.
///
/// Displays as `filename:start:end: message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{span}: {kind}")]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("undefined variable {name}")]
    UndefinedVariable { name: String },

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    WrongArgumentCount { expected: usize, got: usize },

    /// The condition of an `if` reduced to something other than a boolean.
    #[error("condition is not a boolean: got {got}")]
    NotABoolean { got: &'static str },

    #[error("type mismatch: cannot apply {op} to {lhs} and {rhs}")]
    TypeMismatch {
        op: BinaryOp,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// The operands' kind has no equality (closures, tuples) or no ordering (booleans).
    #[error("type not comparable: {op} is not defined for {kind}")]
    TypeNotComparable { op: BinaryOp, kind: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("not a tuple: got {got}")]
    NotATuple { got: &'static str },

    #[error("not a function: got {got}")]
    NotAFunction { got: &'static str },

    /// Writing `print` output failed.
    #[error("cannot write output: {message}")]
    Output { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceExceededError {
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl ExecutionError {
    /// The runtime error, unless this is a resource error.
    pub fn runtime(&self) -> Option<&RuntimeError> {
        match &self.kind {
            ExecutionErrorKind::Runtime(err) => Some(err),
            ExecutionErrorKind::ResourceExceeded(_) => None,
        }
    }
}
