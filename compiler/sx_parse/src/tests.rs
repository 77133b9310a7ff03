#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

fn expr(items: Vec<Value>) -> Value {
    Value::Expr(items)
}

/// Helper: parse and unwrap the program body.
fn forms(source: &str) -> Vec<Value> {
    match &parse(source).unwrap() {
        Value::Expr(forms) => forms.clone(),
        other => panic!("program should be an expr, got {other}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    parse(source).unwrap_err()
}

mod atoms {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_and_symbols() {
        assert_eq!(
            forms("42 -1.5 1e3 path X-Demo !"),
            vec![
                Value::Number(42.0),
                Value::Number(-1.5),
                Value::Number(1000.0),
                sym("path"),
                sym("X-Demo"),
                sym("!"),
            ]
        );
    }

    #[test]
    fn literal_names_are_just_symbols() {
        assert_eq!(
            forms("null true false"),
            vec![sym("null"), sym("true"), sym("false")]
        );
    }
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_token_string() {
        assert_eq!(forms("\"X-Demo\""), vec![Value::string("X-Demo")]);
    }

    #[test]
    fn empty_string() {
        assert_eq!(forms("\"\""), vec![Value::string("")]);
    }

    #[test]
    fn spaces_are_rejoined_singly() {
        assert_eq!(
            forms("\"hello    world\""),
            vec![Value::string("hello world")]
        );
        assert_eq!(
            forms("\"a\nb\tc\""),
            vec![Value::string("a b c")]
        );
    }

    #[test]
    fn lone_quote_is_an_empty_string() {
        assert_eq!(
            forms("(set_req_header \"X-A\" \" v\")"),
            vec![expr(vec![
                sym("set_req_header"),
                Value::string("X-A"),
                Value::string(""),
                sym("v\""),
            ])]
        );
    }

    #[test]
    fn closing_quote_may_stand_alone() {
        assert_eq!(forms("\"a \""), vec![Value::string("a ")]);
    }

    #[test]
    fn numeric_text_stays_a_string() {
        assert_eq!(forms("\"1\""), vec![Value::string("1")]);
    }

    #[test]
    fn parens_inside_strings_are_text() {
        assert_eq!(
            forms("(halt 500 \"oops (again)\")"),
            vec![expr(vec![
                sym("halt"),
                Value::Number(500.0),
                Value::string("oops ( again ) "),
            ])]
        );
    }

    #[test]
    fn end_of_input_ends_a_string() {
        assert_eq!(forms("\"never closed"), vec![Value::string("never closed")]);
    }

    #[test]
    fn string_swallowing_the_close_paren_leaves_the_call_open() {
        let err = parse_err("(halt 500 \"oops)");
        assert_eq!(err.kind, ParseErrorKind::ParseIncomplete);
        assert_eq!(err.span, Span::new(0, 1));
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_program() {
        assert_eq!(parse("").unwrap(), expr(vec![]));
        assert_eq!(parse("  \n ").unwrap(), expr(vec![]));
    }

    #[test]
    fn program_wraps_each_top_level_form() {
        assert_eq!(
            forms("(set_req_header \"X-Demo\" \"test\")\n(run_next)"),
            vec![
                expr(vec![
                    sym("set_req_header"),
                    Value::string("X-Demo"),
                    Value::string("test"),
                ]),
                expr(vec![sym("run_next")]),
            ]
        );
    }

    #[test]
    fn nested_calls() {
        assert_eq!(
            forms("(if (str_contains (get_req_path) \"/admin\") (halt 403 \"no\") (run_next))"),
            vec![expr(vec![
                sym("if"),
                expr(vec![
                    sym("str_contains"),
                    expr(vec![sym("get_req_path")]),
                    Value::string("/admin"),
                ]),
                expr(vec![sym("halt"), Value::Number(403.0), Value::string("no")]),
                expr(vec![sym("run_next")]),
            ])]
        );
    }

    #[test]
    fn empty_parens() {
        assert_eq!(forms("()"), vec![expr(vec![])]);
    }

    #[test]
    fn unclosed_paren_is_incomplete() {
        let err = parse_err("(set k (get_req_path)");
        assert_eq!(err.kind, ParseErrorKind::ParseIncomplete);
        assert_eq!(err.span, Span::new(0, 1));
        assert_eq!(
            err.to_string(),
            "unclosed `(`: input ended inside an expression at 0..1"
        );
    }

    #[test]
    fn stray_close_paren_ends_the_program() {
        assert_eq!(
            forms("(set_req_header \"X-A\" \"1\")) (run_next)"),
            vec![expr(vec![
                sym("set_req_header"),
                Value::string("X-A"),
                Value::string("1"),
            ])]
        );
        assert_eq!(forms(")"), vec![]);
    }

    #[test]
    fn deep_nesting() {
        let depth = 200_000;
        let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        let program = parse(&source).unwrap();
        let mut current = &program;
        let mut levels = 0;
        while let Value::Expr(items) = current {
            levels += 1;
            match items.first() {
                Some(next) => current = next,
                None => break,
            }
        }
        // The program wrapper plus one level per paren pair
        assert_eq!(levels, depth + 1);
    }
}

#[test]
fn read_from_tokens_reports_position() {
    let tokens = tokenize("(a) b");
    let (forms, pos) = read_from_tokens(&tokens, 0).unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(pos, tokens.len());

    let (rest, pos) = read_from_tokens(&tokens, 3).unwrap();
    assert_eq!(rest, vec![sym("b")]);
    assert_eq!(pos, 4);
}

#[test]
fn read_from_tokens_stops_after_close_paren() {
    let tokens = tokenize("(a b) c");
    let (inner, pos) = read_from_tokens(&tokens, 1).unwrap();
    assert_eq!(inner, vec![sym("a"), sym("b")]);
    assert_eq!(pos, 4);
}

#[test]
fn each_parse_builds_a_fresh_tree() {
    let tokens = tokenize("(set k 1)");
    let a = parse_program(&tokens).unwrap();
    let b = parse_program(&tokens).unwrap();
    assert_eq!(a, b);
}

// ─── Property Tests ────────────────────────────────────────────

/// Source text of one balanced form, plus nothing else.
fn form_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        prop::string::string_regex("[a-z_!=]{1,6}").unwrap(),
        (0u32..1000).prop_map(|n| n.to_string()),
        prop::string::string_regex("\"[a-z]([a-z ]{0,5}[a-z])?\"").unwrap(),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(|items| format!("({})", items.join(" ")))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn balanced_input_is_fully_consumed(
        groups in prop::collection::vec(form_strategy(), 0..6),
    ) {
        let source = groups.join("\n");
        let tokens = tokenize(&source);
        let (forms, consumed) = read_from_tokens(&tokens, 0).unwrap();
        prop_assert_eq!(consumed, tokens.len());
        prop_assert_eq!(forms.len(), groups.len());
    }
}
