// End-to-end runs of well-formed programs.

#[macro_use]
mod cases;

use cases::*;

program_test!(
    let_sum,
    program: let_("x", int(10), let_("y", int(20), print(binary(var("x"), "Add", var("y"))))),
    output: "30\n",
);

program_test!(
    fib_10,
    program: let_("fib", fib(), print(call(var("fib"), vec![int(10)]))),
    output: "55\n",
);

program_test!(
    print_each_literal,
    program: let_(
        "_",
        print(int(-7)),
        let_("_", print(str("hello, world")), print(bool(false))),
    ),
    output: "-7\nhello, world\nfalse\n",
);

program_test!(
    print_returns_nil,
    program: print(print(int(1))),
    output: "1\nnil\n",
);

program_test!(
    print_closure,
    program: print(function(&["x"], var("x"))),
    output: "<#closure>\n",
);

program_test!(
    print_tuple,
    program: print(tuple(int(1), str("a"))),
    output: "(1, a)\n",
);

program_test!(
    print_nested_tuple,
    program: print(tuple(tuple(int(1), bool(true)), tuple(str("x"), function(&[], int(0))))),
    output: "((1, true), (x, <#closure>))\n",
);

program_test!(
    tuple_components_use_scope_of_print,
    // let t = (x, 1); let x = 2; print(t)
    program: let_("t", tuple(var("x"), int(1)), let_("x", int(2), print(var("t")))),
    output: "(2, 1)\n",
);

program_test!(
    first_and_second,
    program: let_(
        "pair",
        tuple(int(3), str("three")),
        print(tuple(second(var("pair")), first(var("pair")))),
    ),
    output: "(three, 3)\n",
);

program_test!(
    string_concatenation,
    program: print(binary(
        binary(str("n = "), "Add", int(4)),
        "Add",
        binary(str(", ok = "), "Add", bool(true)),
    )),
    output: "n = 4, ok = true\n",
);

program_test!(
    integer_arithmetic,
    program: print(tuple(
        tuple(binary(int(7), "Sub", int(10)), binary(int(6), "Mul", int(7))),
        tuple(binary(int(-7), "Div", int(2)), binary(int(-7), "Rem", int(2))),
    )),
    output: "((-3, 42), (-3, -1))\n",
);

program_test!(
    integer_arithmetic_wraps,
    program: print(tuple(
        binary(int(i32::MAX as i64), "Add", int(1)),
        binary(int(i32::MIN as i64), "Div", int(-1)),
    )),
    output: "(-2147483648, -2147483648)\n",
);

program_test!(
    comparisons,
    program: print(tuple(
        tuple(binary(int(1), "Lt", int(2)), binary(int(2), "Lte", int(2))),
        tuple(binary(str("abc"), "Gt", str("abd")), binary(str("b"), "Gte", str("a"))),
    )),
    output: "((true, true), (false, true))\n",
);

program_test!(
    equality,
    program: print(tuple(
        tuple(binary(int(1), "Eq", int(1)), binary(str("a"), "Neq", str("a"))),
        tuple(binary(bool(true), "Eq", bool(true)), binary(bool(true), "Neq", bool(false))),
    )),
    output: "((true, false), (true, true))\n",
);

program_test!(
    logical_operators,
    program: print(tuple(
        binary(bool(true), "And", bool(false)),
        binary(bool(false), "Or", bool(true)),
    )),
    output: "(false, true)\n",
);

program_test!(
    if_selects_branch,
    program: print(if_(binary(int(1), "Eq", int(2)), str("same"), str("different"))),
    output: "different\n",
);

program_test!(
    higher_order_function,
    // let twice = fn (f, x) => f(f(x)); print(twice(fn (n) => n * 3, 2))
    program: let_(
        "twice",
        function(&["f", "x"], call(var("f"), vec![call(var("f"), vec![var("x")])])),
        print(call(
            var("twice"),
            vec![function(&["n"], binary(var("n"), "Mul", int(3))), int(2)],
        )),
    ),
    output: "18\n",
);

program_test!(
    immediately_called_function,
    program: print(call(function(&["a", "b"], binary(var("a"), "Sub", var("b"))), vec![int(5), int(8)])),
    output: "-3\n",
);

program_test!(
    body_reads_caller_bindings,
    // let show = fn () => print(greeting); let greeting = "hi"; show()
    program: let_(
        "show",
        function(&[], print(var("greeting"))),
        let_("greeting", str("hi"), call(var("show"), vec![])),
    ),
    output: "hi\n",
);

program_test!(
    recursive_sum,
    // let sum = fn (n) => if (n == 0) { 0 } else { n + sum(n - 1) }; print(sum(1000))
    program: let_(
        "sum",
        function(
            &["n"],
            if_(
                binary(var("n"), "Eq", int(0)),
                int(0),
                binary(var("n"), "Add", call(var("sum"), vec![binary(var("n"), "Sub", int(1))])),
            ),
        ),
        print(call(var("sum"), vec![int(1000)])),
    ),
    output: "500500\n",
);

#[test]
fn fib_30_prints_once() {
    pretty_assertions::assert_eq!(
        run(&FIB_30),
        Outcome {
            output: "832040\n".to_string(),
            error: None,
        }
    );
}
