//! Rinha - an interpreter for programs delivered as JSON syntax trees
//!
//! # Overview
//!
//! A Rinha program is a single expression tree: literals, variables,
//! first-class functions, `let`, `if`, binary operators, pairs and `print`.
//! A front end parses the source text and hands over the tree as JSON; this
//! crate decodes that document and evaluates it, writing `print` output to
//! any [`std::io::Write`] sink.
//!
//! # Quick Start
//!
//! ```
//! use rinha::{Engine, EngineOptions};
//! use bumpalo::Bump;
//!
//! let source = r#"{
//!     "name": "answer.rinha",
//!     "expression": {
//!         "kind": "Print",
//!         "value": { "kind": "Int", "value": 42, "location": { "start": 6, "end": 8, "filename": "answer.rinha" } },
//!         "location": { "start": 0, "end": 9, "filename": "answer.rinha" }
//!     },
//!     "location": { "start": 0, "end": 9, "filename": "answer.rinha" }
//! }"#;
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default());
//! let mut out = Vec::new();
//! engine.execute(&arena, source, &mut out).unwrap();
//! assert_eq!(out, b"42\n");
//! ```
//!
//! # Errors
//!
//! Decoding and evaluation fail with [`Error`]. [`error_line`] formats either
//! kind as `filename:start:end: message`; decode errors name the document at
//! offset 0. [`render_error`] and friends can also draw
//! the offending source snippet when the program's source text is at hand.

mod error_renderer;

// Re-export public API from rinha_core
pub use rinha_core::api::{Engine, EngineOptions, Error};

pub use rinha_core::ast::{self, BinaryOp, Location, Program, Span, Term, TermKind};
pub use rinha_core::values::{self, Value};

// Re-export errors and options of both stages
pub use rinha_core::decoder::{self, DecodeError, DecoderOptions};
pub use rinha_core::evaluator::{
    self, EvaluatorOptions, ExecutionError, ExecutionErrorKind, ResourceExceededError,
    RuntimeError,
};

pub use error_renderer::{
    error_line, render_error, render_error_to, render_error_to_string,
    render_error_to_string_no_color,
};
