//! Printing a parsed program and parsing the output again yields the same
//! tree (positions aside), so printing is a fixed point after one pass.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wjs_ir::dump;
use wjs_parse::parse_source;

fn reprint(source: &str) -> String {
    match parse_source("", source) {
        Ok(program) => program.to_string(),
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn assert_round_trip(source: &str) {
    let first = match parse_source("", source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    };
    let printed = first.to_string();
    let second = match parse_source("", &printed) {
        Ok(program) => program,
        Err(err) => panic!("printed form {printed:?} failed to parse: {err}"),
    };
    assert_eq!(dump(&first), dump(&second), "printed form: {printed}");
    assert_eq!(printed, second.to_string());
}

#[test]
fn statements_round_trip() {
    for source in [
        "let x = 5; x = x + 1; print(x);",
        "let m = load(\"in.wxx\"); m.tiles[0].terrain = \"mountain\"; save(m, 'out.wxx');",
        "print(-1.0, 2.50, 10 % 3, !true != false);",
        "`Value is ${1 + 2} and ${m.name}`;",
        "print(\"tab\\tquote\\\" back\\\\slash\");",
        "`cost: \\${literal} ${'}'}`;",
        "a == b < c + d * -e;",
        "((1));",
    ] {
        assert_round_trip(source);
    }
}

#[test]
fn printer_output_is_canonical() {
    assert_eq!(reprint("let   x=1+2*3 ;"), "let x = (1 + (2 * 3));\n");
    assert_eq!(reprint("f( a ,b )[ 0 ].c;"), "f(a, b)[0].c;\n");
    assert_eq!(reprint("8.0;"), "8.0;\n");
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z][a-z0-9_]{0,4}".prop_filter("reserved word", |s| {
            !matches!(s.as_str(), "let" | "true" | "false" | "null" | "if" | "else")
        }),
        Just("true".to_string()),
        Just("null".to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
    ]
}

fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "%", "<", "<=", ">", ">=", "==", "!="]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("({f})({})", args.join(", "))),
            (inner.clone(), inner.clone()).prop_map(|(t, i)| format!("({t})[{i}]")),
            inner.prop_map(|e| format!("({e}).field")),
            // A backtick inside an interpolation would close the template.
            (leaf(), leaf()).prop_map(|(a, b)| format!("`pre ${{{a} + {b}}} post`")),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_round_trip(source in expr()) {
        let source = format!("{source};");
        let first = parse_source("", &source);
        prop_assert!(first.is_ok(), "{}: {:?}", source, first);
        if let Ok(first) = first {
            let printed = first.to_string();
            let second = parse_source("", &printed);
            prop_assert!(second.is_ok(), "{}: {:?}", printed, second);
            if let Ok(second) = second {
                prop_assert_eq!(dump(&first), dump(&second));
            }
        }
    }
}
