//! Encoding tests: documents written by the encoder decode back to the same tree.

use crate::ast::{BinaryOp, Program, Term, TermBuilder};
use crate::decoder::{DecoderOptions, decode_program, decode_term};
use crate::evaluator::{Evaluator, EvaluatorOptions};
use bumpalo::Bump;
use pretty_assertions::assert_eq;
use serde_json::json;

fn reencode<'a>(arena: &'a Bump, term: &Term<'_>) -> &'a Term<'a> {
    let document = serde_json::to_value(term).unwrap();
    decode_term(arena, &document, &DecoderOptions::default()).unwrap()
}

fn run<'a>(arena: &'a Bump, program: &Program<'a>) -> String {
    let mut out = Vec::new();
    Evaluator::new(arena, EvaluatorOptions::default(), &mut out)
        .run(program)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_literal_document_shape() {
    let arena = Bump::new();
    let b = TermBuilder::new(&arena, "lit.rinha");
    let document = serde_json::to_value(b.str("hi")).unwrap();
    assert_eq!(
        document,
        json!({
            "kind": "Str",
            "value": "hi",
            "location": { "start": 0, "end": 1, "filename": "lit.rinha" }
        })
    );
}

#[test]
fn test_binary_document_uses_operator_tag() {
    let arena = Bump::new();
    let b = TermBuilder::new(&arena, "op.rinha");
    let term = b.binary(b.int(1), BinaryOp::Lte, b.int(2));
    let document = serde_json::to_value(term).unwrap();
    assert_eq!(document["op"], json!("Lte"));
    assert_eq!(document["lhs"]["value"], json!(1));
}

#[test]
fn test_every_term_kind_survives_reencoding() {
    let arena = Bump::new();
    let b = TermBuilder::new(&arena, "all.rinha");
    let terms = [
        b.int(-3),
        b.str("text"),
        b.bool(false),
        b.var("x"),
        b.function(&["a", "b"], b.binary(b.var("a"), BinaryOp::Sub, b.var("b"))),
        b.call(b.var("f"), &[b.int(1), b.str("two")]),
        b.let_("x", b.int(1), b.print(b.var("x"))),
        b.if_(b.bool(true), b.int(1), b.int(2)),
        b.tuple(b.int(1), b.tuple(b.str("a"), b.bool(true))),
        b.first(b.var("t")),
        b.second(b.var("t")),
    ];

    let decoded_arena = Bump::new();
    for term in terms {
        assert_eq!(reencode(&decoded_arena, term), term);
    }
}

#[test]
fn test_reencoded_program_prints_the_same() {
    let arena = Bump::new();
    let b = TermBuilder::new(&arena, "fib.rinha");
    let fib = b.function(
        &["n"],
        b.if_(
            b.binary(b.var("n"), BinaryOp::Lt, b.int(2)),
            b.var("n"),
            b.binary(
                b.call(b.var("fib"), &[b.binary(b.var("n"), BinaryOp::Sub, b.int(1))]),
                BinaryOp::Add,
                b.call(b.var("fib"), &[b.binary(b.var("n"), BinaryOp::Sub, b.int(2))]),
            ),
        ),
    );
    let body = b.let_(
        "fib",
        fib,
        b.print(b.tuple(b.call(b.var("fib"), &[b.int(10)]), b.str("done"))),
    );
    let program = b.program("fib.rinha", body);

    let document = serde_json::to_value(program).unwrap();
    let decoded_arena = Bump::new();
    let decoded = decode_program(&decoded_arena, &document, &DecoderOptions::default()).unwrap();

    assert_eq!(run(&arena, &program), "(55, done)\n");
    assert_eq!(run(&decoded_arena, &decoded), run(&arena, &program));
}

#[test]
fn test_deep_program_encodes_and_decodes() {
    let arena = Bump::new();
    let b = TermBuilder::new(&arena, "deep.rinha");
    let depth = 99_000;
    let mut term = b.int(7);
    for _ in 0..depth {
        term = b.print(term);
    }
    let program = b.program("deep.rinha", term);

    let source = serde_json::to_string(&program).unwrap();
    let decoded =
        crate::decoder::decode_program_str(&arena, &source, &DecoderOptions::default()).unwrap();

    let mut term = decoded.expression;
    let mut seen = 0;
    while let crate::ast::TermKind::Print(value) = term.kind {
        term = value;
        seen += 1;
    }
    assert_eq!(seen, depth);
    assert_eq!(term.kind, crate::ast::TermKind::Int(7));
}
