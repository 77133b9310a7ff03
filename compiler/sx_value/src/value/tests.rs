#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

mod conversions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn as_string_accepts_text_like_values() {
        assert_eq!(Value::string("abc").as_string(), Ok("abc".to_owned()));
        assert_eq!(Value::symbol("path").as_string(), Ok("path".to_owned()));
        assert_eq!(Value::Bool(true).as_string(), Ok("true".to_owned()));
        assert_eq!(Value::Bool(false).as_string(), Ok("false".to_owned()));
    }

    #[test]
    fn as_string_formats_numbers_with_six_decimals() {
        assert_eq!(Value::Number(42.0).as_string(), Ok("42.000000".to_owned()));
        assert_eq!(Value::Number(-0.5).as_string(), Ok("-0.500000".to_owned()));
    }

    #[test]
    fn infinities_are_signed() {
        assert_eq!(Value::Number(f64::INFINITY).as_string(), Ok("+Inf".to_owned()));
        assert_eq!(Value::Number(f64::NEG_INFINITY).as_string(), Ok("-Inf".to_owned()));
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Inf");
        assert_eq!(Value::Number(f64::NAN).as_string(), Ok("NaN".to_owned()));
    }

    #[test]
    fn as_string_rejects_null_and_collections() {
        for value in [Value::Null, list(vec![]), Value::Expr(vec![])] {
            let err = value.as_string().unwrap_err();
            assert!(err.is_type_mismatch(), "{value}");
        }
    }

    #[test]
    fn as_bool_truthiness() {
        assert_eq!(Value::Bool(true).as_bool(), Ok(true));
        assert_eq!(Value::string("").as_bool(), Ok(false));
        assert_eq!(Value::string("x").as_bool(), Ok(true));
        assert_eq!(Value::Number(0.0).as_bool(), Ok(false));
        assert_eq!(Value::Number(-1.0).as_bool(), Ok(true));
        assert_eq!(list(vec![]).as_bool(), Ok(false));
        assert_eq!(list(vec![Value::Null]).as_bool(), Ok(true));
        assert_eq!(Value::Null.as_bool(), Ok(false));
    }

    #[test]
    fn as_bool_rejects_symbols_and_functions() {
        assert!(Value::symbol("x").as_bool().is_err());
        let f = Value::function("f", |_, _| Ok(Value::Null));
        assert!(f.as_bool().is_err());
    }

    #[test]
    fn as_symbol_name_accepts_symbol_or_string() {
        assert_eq!(Value::symbol("k").as_symbol_name(), Ok("k"));
        assert_eq!(Value::string("X-Demo").as_symbol_name(), Ok("X-Demo"));
        let err = Value::Number(42.0).as_symbol_name().unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch: expected symbol or string, got number"
        );
    }

    #[test]
    fn as_number_accepts_bools() {
        assert_eq!(Value::Number(503.0).as_number(), Ok(503.0));
        assert_eq!(Value::Bool(true).as_number(), Ok(1.0));
        assert_eq!(Value::Bool(false).as_number(), Ok(0.0));
        assert!(Value::string("503").as_number().is_err());
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_must_match() {
        assert!(!Value::Number(1.0).strict_eq(&Value::string("1")));
        assert!(!Value::Bool(false).strict_eq(&Value::Null));
    }

    #[test]
    fn payloads_compare_for_scalars() {
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(Value::Bool(true).strict_eq(&Value::Bool(true)));
        assert!(Value::Number(2.5).strict_eq(&Value::Number(2.5)));
        assert!(Value::string("a").strict_eq(&Value::string("a")));
        assert!(!Value::string("a").strict_eq(&Value::string("b")));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert!(!Value::Number(f64::NAN).strict_eq(&Value::Number(f64::NAN)));
    }

    #[test]
    fn collections_and_functions_never_compare_equal() {
        let l = list(vec![Value::Null]);
        assert!(!l.strict_eq(&l.clone()));
        let e = Value::Expr(vec![]);
        assert!(!e.strict_eq(&e.clone()));
        let f = Value::function("f", |_, _| Ok(Value::Null));
        assert!(!f.strict_eq(&f.clone()));
        assert!(!Value::symbol("a").strict_eq(&Value::symbol("a")));
    }

    #[test]
    fn structural_eq_descends_into_lists() {
        assert_eq!(
            list(vec![Value::Number(1.0), Value::string("a")]),
            list(vec![Value::Number(1.0), Value::string("a")])
        );
        let f = Value::function("f", |_, _| Ok(Value::Null));
        assert_eq!(f, f.clone());
        assert_ne!(f, Value::function("f", |_, _| Ok(Value::Null)));
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_tag() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Number(1.0).to_string(), "1.000000");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        assert_eq!(Value::symbol("get").to_string(), "get");
        assert_eq!(
            Value::function("halt", |_, _| Ok(Value::Null)).to_string(),
            "(func halt)"
        );
    }

    #[test]
    fn renders_nested_sequences() {
        let expr = Value::Expr(vec![
            Value::symbol("set"),
            Value::symbol("k"),
            Value::Expr(vec![Value::symbol("get_req_path")]),
        ]);
        assert_eq!(expr.to_string(), "(expr set:k,(expr get_req_path:))");
        assert_eq!(
            list(vec![Value::Null, Value::Bool(true)]).to_string(),
            "(list:null,true)"
        );
        assert_eq!(Value::Expr(vec![]).to_string(), "(expr)");
    }
}

mod deep_trees {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested(depth: usize) -> Value {
        let mut value = Value::Expr(vec![]);
        for _ in 0..depth {
            value = Value::Expr(vec![value]);
        }
        value
    }

    #[test]
    fn dropping_a_deep_tree_does_not_overflow() {
        drop(nested(200_000));
        drop(list(vec![nested(100_000), Value::Null, nested(100_000)]));
    }

    #[test]
    fn clone_and_compare_deep_trees() {
        let value = nested(100_000);
        let copy = value.clone();
        assert!(value == copy);
    }

    #[test]
    fn display_deep_tree() {
        let text = nested(100_000).to_string();
        assert_eq!(text.matches("(expr").count(), 100_001);
    }

    #[test]
    fn drop_keeps_siblings_intact() {
        let shared = Value::string("kept");
        let tree = list(vec![nested(3), shared.clone()]);
        drop(tree);
        assert_eq!(shared, Value::string("kept"));
    }
}
