//! Shared helpers for the integration tests.
//!
//! Terms are built as JSON documents, exactly as a front end would emit
//! them, and run through the public [`Engine`].

#![allow(dead_code)]

use bumpalo::Bump;
use once_cell::sync::Lazy;
use rinha::{Engine, EngineOptions, EvaluatorOptions, error_line};
use serde_json::{Value as Json, json};

pub const FILE: &str = "test.rinha";
/// Name the harness reports decode errors under.
pub const DOCUMENT: &str = "test.json";

pub fn loc(start: usize, end: usize) -> Json {
    json!({ "start": start, "end": end, "filename": FILE })
}

/// Replace the location of a term.
pub fn at(mut term: Json, start: usize, end: usize) -> Json {
    term["location"] = loc(start, end);
    term
}

fn term(kind: &str, mut fields: Json) -> Json {
    fields["kind"] = json!(kind);
    fields["location"] = loc(0, 0);
    fields
}

pub fn int(value: i64) -> Json {
    term("Int", json!({ "value": value }))
}

pub fn str(value: &str) -> Json {
    term("Str", json!({ "value": value }))
}

pub fn bool(value: bool) -> Json {
    term("Bool", json!({ "value": value }))
}

pub fn var(text: &str) -> Json {
    term("Var", json!({ "text": text }))
}

fn parameter(text: &str) -> Json {
    json!({ "text": text, "location": loc(0, 0) })
}

pub fn function(parameters: &[&str], body: Json) -> Json {
    let parameters: Vec<Json> = parameters.iter().map(|p| parameter(p)).collect();
    term("Function", json!({ "parameters": parameters, "value": body }))
}

pub fn call(callee: Json, arguments: Vec<Json>) -> Json {
    term("Call", json!({ "callee": callee, "arguments": arguments }))
}

pub fn let_(name: &str, value: Json, next: Json) -> Json {
    term("Let", json!({ "name": parameter(name), "value": value, "next": next }))
}

pub fn if_(condition: Json, then: Json, otherwise: Json) -> Json {
    term(
        "If",
        json!({ "condition": condition, "then": then, "otherwise": otherwise }),
    )
}

pub fn binary(lhs: Json, op: &str, rhs: Json) -> Json {
    term("Binary", json!({ "lhs": lhs, "op": op, "rhs": rhs }))
}

pub fn tuple(first: Json, second: Json) -> Json {
    term("Tuple", json!({ "first": first, "second": second }))
}

pub fn print(value: Json) -> Json {
    term("Print", json!({ "value": value }))
}

pub fn first(value: Json) -> Json {
    term("First", json!({ "value": value }))
}

pub fn second(value: Json) -> Json {
    term("Second", json!({ "value": value }))
}

/// Wrap an expression into a complete program document.
pub fn document(expression: Json) -> String {
    json!({ "name": FILE, "expression": expression, "location": loc(0, 0) }).to_string()
}

/// `fn (n) => if (n < 2) { n } else { fib(n - 1) + fib(n - 2) }`
pub fn fib() -> Json {
    function(
        &["n"],
        if_(
            binary(var("n"), "Lt", int(2)),
            var("n"),
            binary(
                call(var("fib"), vec![binary(var("n"), "Sub", int(1))]),
                "Add",
                call(var("fib"), vec![binary(var("n"), "Sub", int(2))]),
            ),
        ),
    )
}

/// `let fib = ...; print(fib(30))`
pub static FIB_30: Lazy<String> = Lazy::new(|| {
    document(let_(
        "fib",
        fib(),
        print(call(var("fib"), vec![int(30)])),
    ))
});

/// What a run wrote, and the one-line error it stopped with, if any.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub error: Option<String>,
}

pub fn run(document: &str) -> Outcome {
    run_with(document, EvaluatorOptions::default())
}

pub fn run_with(document: &str, execution: EvaluatorOptions) -> Outcome {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions {
        execution,
        ..Default::default()
    });
    let mut out = Vec::new();
    let error = engine
        .execute(&arena, document, &mut out)
        .err()
        .map(|err| error_line(&err, DOCUMENT));
    Outcome {
        output: String::from_utf8(out).unwrap(),
        error,
    }
}

/// Define a test running `program` (an expression) and checking what it
/// printed, and optionally the error line it stopped with.
macro_rules! program_test {
    ($name:ident, program: $program:expr, output: $output:expr $(,)?) => {
        #[test]
        fn $name() {
            let outcome = cases::run(&cases::document($program));
            pretty_assertions::assert_eq!(
                outcome,
                cases::Outcome {
                    output: $output.to_string(),
                    error: None,
                }
            );
        }
    };
    ($name:ident, program: $program:expr, output: $output:expr, error: $error:expr $(,)?) => {
        #[test]
        fn $name() {
            let outcome = cases::run(&cases::document($program));
            pretty_assertions::assert_eq!(
                outcome,
                cases::Outcome {
                    output: $output.to_string(),
                    error: Some($error.to_string()),
                }
            );
        }
    };
}
