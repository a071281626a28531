//! Main entry point for the interpreter API.

use bumpalo::Bump;
use std::io::Write;

use crate::{
    api::{EngineOptions, Error},
    ast::Program,
    decoder,
    evaluator::Evaluator,
    values::Value,
};

/// Decodes and runs programs with a fixed set of options.
///
/// The engine holds no per-program state; syntax trees and runtime values
/// live in the arena passed to each call.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Decode a JSON document into a program allocated in `arena`.
    pub fn load<'a>(&self, arena: &'a Bump, source: &str) -> Result<Program<'a>, Error> {
        Ok(decoder::decode_program_str(
            arena,
            source,
            &self.options.decoding,
        )?)
    }

    /// Run a decoded program, writing its output to `out`.
    ///
    /// Each run starts with an empty scope and an empty call cache.
    pub fn run<'a>(
        &self,
        arena: &'a Bump,
        program: &Program<'a>,
        out: &mut dyn Write,
    ) -> Result<Value<'a>, Error> {
        let mut evaluator = Evaluator::new(arena, self.options.execution.clone(), out);
        Ok(evaluator.run(program)?)
    }

    /// Decode and run a JSON document.
    pub fn execute<'a>(
        &self,
        arena: &'a Bump,
        source: &str,
        out: &mut dyn Write,
    ) -> Result<Value<'a>, Error> {
        let program = self.load(arena, source)?;
        self.run(arena, &program, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodeError;

    const PRINT_SUM: &str = r#"{
        "name": "sum.rinha",
        "expression": {
            "kind": "Print",
            "value": {
                "kind": "Binary",
                "lhs": { "kind": "Int", "value": 10, "location": { "start": 6, "end": 8, "filename": "sum.rinha" } },
                "op": "Add",
                "rhs": { "kind": "Int", "value": 20, "location": { "start": 11, "end": 13, "filename": "sum.rinha" } },
                "location": { "start": 6, "end": 13, "filename": "sum.rinha" }
            },
            "location": { "start": 0, "end": 14, "filename": "sum.rinha" }
        },
        "location": { "start": 0, "end": 14, "filename": "sum.rinha" }
    }"#;

    #[test]
    fn test_execute_prints() {
        let arena = Bump::new();
        let mut out = Vec::new();
        let result = Engine::default().execute(&arena, PRINT_SUM, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "30\n");
        assert_eq!(result, Value::Nil);
    }

    #[test]
    fn test_load_then_run_twice() {
        let arena = Bump::new();
        let engine = Engine::default();
        let program = engine.load(&arena, PRINT_SUM).unwrap();

        let mut out = Vec::new();
        engine.run(&arena, &program, &mut out).unwrap();
        engine.run(&arena, &program, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "30\n30\n");
    }

    #[test]
    fn test_decode_errors_are_reported_before_running() {
        let arena = Bump::new();
        let mut out = Vec::new();
        let result = Engine::default().execute(&arena, "{\"name\": ", &mut out);

        assert!(matches!(result, Err(Error::Decode(DecodeError::Json(_)))));
        assert!(out.is_empty());
    }
}
