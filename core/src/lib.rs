//! Interpreter for Rinha programs delivered as JSON syntax trees.
//!
//! The pipeline has two stages: the [`decoder`] rebuilds a [`ast::Term`]
//! tree inside an arena, then the [`evaluator`] walks it. The [`api`]
//! module wraps both behind an [`api::Engine`].

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod ast;
pub mod decoder;
pub mod evaluator;
pub mod scope;
pub mod stack;
pub mod values;
