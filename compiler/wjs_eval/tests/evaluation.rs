//! End-to-end evaluation properties: source text in, values out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wjs_eval::{silent_handler, Interpreter, RuntimeError, UnsupportedMapIo, Value};
use wjs_parse::parse_source;

fn eval(source: &str) -> Result<Value, RuntimeError> {
    let program = parse_source("", source).expect("source should parse");
    Interpreter::new("", UnsupportedMapIo)
        .with_print_handler(silent_handler())
        .execute(&program)
}

/// Evaluation outcome as a comparable string; errors keep only the message
/// since printing moves columns.
fn outcome(source: &str) -> String {
    match eval(source) {
        Ok(value) => format!("{value:?}"),
        Err(err) => format!("error: {}", err.message()),
    }
}

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0..=i64::MAX) {
        prop_assert_eq!(eval(&format!("{n};")).unwrap(), Value::Int(n));
        prop_assert_eq!(eval(&format!("-{n};")).unwrap(), Value::Int(-n));
    }

    #[test]
    fn float_literals_evaluate_to_floats(whole in 0u32..1_000_000, frac in 0u32..1000) {
        let text = format!("{whole}.{frac:03}");
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(eval(&format!("{text};")).unwrap(), Value::Float(expected));
    }

    #[test]
    fn equality_is_reflexive(literal in literal()) {
        let source = format!("let v = {literal}; v == v;");
        prop_assert_eq!(eval(&source).unwrap(), Value::Bool(true));
        let source = format!("{literal} != {literal};");
        prop_assert_eq!(eval(&source).unwrap(), Value::Bool(false));
    }

    #[test]
    fn printed_programs_evaluate_the_same(expr in arith()) {
        let source = format!("{expr};");
        let printed = parse_source("", &source).unwrap().to_string();
        prop_assert_eq!(outcome(&source), outcome(&printed), "printed: {}", printed);
    }
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        (0u8..10).prop_map(|n| format!("`n=${{{n}}}`")),
    ]
}

fn arith() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i64..50).prop_map(|n| n.to_string()),
        (0u32..50, 1u32..10).prop_map(|(a, b)| format!("{a}.{b}")),
        Just("\"s\"".to_string()),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        let op = prop::sample::select(vec![
            "+", "-", "*", "/", "%", "<", "<=", ">", ">=", "==", "!=",
        ]);
        prop_oneof![
            (inner.clone(), op, inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.prop_map(|e| format!("-{e}")),
        ]
    })
}

#[test]
fn arithmetic_assignment_and_errors() {
    assert_eq!(eval("5 + 3;").unwrap(), Value::Int(8));
    assert_eq!(eval("5.0 + 3;").unwrap(), Value::Float(8.0));
    assert_eq!(eval("20 / 4;").unwrap(), Value::Float(5.0));
    assert_eq!(eval("let x = 5; x = 10; x;").unwrap(), Value::Int(10));
    assert_eq!(
        eval("5 / 0;").unwrap_err().to_string(),
        "Runtime error at 1:3: division by zero"
    );
}

#[test]
fn interpolations_may_contain_braces_in_strings() {
    assert_eq!(
        eval("let n = 2; `a${\"}\" + n}b`;").unwrap_err().message(),
        "type mismatch for + operator"
    );
    assert_eq!(
        eval("`a${\"}\"}b${1 + 1}`;").unwrap(),
        Value::string("a}b2")
    );
}
