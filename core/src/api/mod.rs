//! Public API for embedding the interpreter.
//!
//! # Example
//!
//! ```
//! use rinha_core::api::{Engine, EngineOptions};
//! use bumpalo::Bump;
//!
//! let source = r#"{
//!     "name": "hello.rinha",
//!     "expression": {
//!         "kind": "Print",
//!         "value": {
//!             "kind": "Str",
//!             "value": "hello",
//!             "location": { "start": 6, "end": 13, "filename": "hello.rinha" }
//!         },
//!         "location": { "start": 0, "end": 14, "filename": "hello.rinha" }
//!     },
//!     "location": { "start": 0, "end": 14, "filename": "hello.rinha" }
//! }"#;
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default());
//! let mut out = Vec::new();
//! engine.execute(&arena, source, &mut out).unwrap();
//! assert_eq!(out, b"hello\n");
//! ```

mod engine;
mod error;
mod options;

pub use engine::Engine;
pub use error::Error;
pub use options::EngineOptions;
