//! JSON syntax-tree decoder.
//!
//! Programs arrive as a tree of objects, each carrying a `kind` discriminant
//! and a `location`, plus the fields of that kind:
//!
//! ```json
//! {
//!   "name": "sum.rinha",
//!   "expression": {
//!     "kind": "Print",
//!     "value": { "kind": "Int", "value": 30, "location": { ... } },
//!     "location": { "start": 0, "end": 8, "filename": "sum.rinha" }
//!   },
//!   "location": { "start": 0, "end": 8, "filename": "sum.rinha" }
//! }
//! ```
//!
//! Decoding peeks at `kind` before committing to a shape, decodes the scalar
//! fields of that kind directly and recurses into every child term. Nodes
//! are allocated in the caller's arena.

mod decode;
mod error;


pub use error::DecodeError;

use crate::ast::{Program, Term};
use bumpalo::Bump;
use decode::Decoder;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value as Document;

/// Limits applied while decoding.
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Maximum nesting of terms inside one another.
    ///
    /// Default: 100_000
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self { max_depth: 100_000 }
    }
}

/// Parse JSON text and decode the program it contains.
pub fn decode_program_str<'a>(
    arena: &'a Bump,
    source: &str,
    options: &DecoderOptions,
) -> Result<Program<'a>, DecodeError> {
    let document = parse_document(source)?;
    let program = decode_program(arena, &document, options);
    drop_document(document);
    program
}

/// Decode a program (`name`, `expression`, `location`) from a parsed document.
pub fn decode_program<'a>(
    arena: &'a Bump,
    document: &Document,
    options: &DecoderOptions,
) -> Result<Program<'a>, DecodeError> {
    let mut decoder = Decoder::new(arena, options);
    let program = decoder.program(document)?;
    tracing::debug!(
        name = program.name,
        nodes = decoder.nodes(),
        "decoded program"
    );
    Ok(program)
}

/// Decode a single term document.
pub fn decode_term<'a>(
    arena: &'a Bump,
    document: &Document,
    options: &DecoderOptions,
) -> Result<&'a Term<'a>, DecodeError> {
    Decoder::new(arena, options).term(document)
}

fn parse_document(source: &str) -> Result<Document, DecodeError> {
    // Syntax is checked before building anything, so a failure never leaves
    // a half-built deep tree to drop.
    parse::<IgnoredAny>(source)?;
    parse::<Document>(source)
}

fn parse<T: DeserializeOwned>(source: &str) -> Result<T, DecodeError> {
    // serde_json's own recursion limit would reject the deep documents that
    // `DecoderOptions::max_depth` is meant to accept. serde_stacker grows the
    // stack instead as parsing descends.
    let mut json = serde_json::Deserializer::from_str(source);
    json.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Drop a parsed document without recursing once per nesting level.
fn drop_document(document: Document) {
    let mut pending = vec![document];
    while let Some(value) = pending.pop() {
        match value {
            Document::Array(items) => pending.extend(items),
            Document::Object(fields) => pending.extend(fields.into_iter().map(|(_, value)| value)),
            _ => {}
        }
    }
}
