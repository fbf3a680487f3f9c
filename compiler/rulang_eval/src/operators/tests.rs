use super::*;
use crate::EvalError;
use proptest::prelude::*;

fn n(x: f64) -> Value {
    Value::Number(x)
}

#[test]
fn number_arithmetic() {
    assert_eq!(arith(ArithOp::Add, &n(1.0), &n(5.0)), Ok(n(6.0)));
    assert_eq!(arith(ArithOp::Sub, &n(1.0), &n(5.0)), Ok(n(-4.0)));
    assert_eq!(arith(ArithOp::Mul, &n(1.5), &n(2.0)), Ok(n(3.0)));
    assert_eq!(arith(ArithOp::Div, &n(1.0), &n(4.0)), Ok(n(0.25)));
}

#[test]
fn division_by_zero_is_infinite() {
    assert_eq!(arith(ArithOp::Div, &n(1.0), &n(0.0)), Ok(n(f64::INFINITY)));
}

#[test]
fn plus_with_string_concatenates() {
    assert_eq!(
        arith(ArithOp::Add, &Value::from("n"), &n(6.0)),
        Ok(Value::from("n6"))
    );
    assert_eq!(
        arith(ArithOp::Add, &n(2.5), &Value::from("x")),
        Ok(Value::from("2.5x"))
    );
}

#[test]
fn other_mixes_are_type_mismatch() {
    assert_eq!(
        arith(ArithOp::Sub, &Value::from("a"), &n(1.0)),
        Err(EvalError::TypeMismatch {
            context: "`-`".into(),
            expected: "number".into(),
            found: "string".into(),
        })
    );
    assert!(matches!(
        arith(ArithOp::Add, &n(1.0), &Value::Absent),
        Err(EvalError::TypeMismatch { found, .. }) if found == "absent"
    ));
    assert!(arith(ArithOp::Mul, &Value::Bool(true), &n(1.0)).is_err());
}

#[test]
fn equality_is_structural() {
    assert_eq!(compare(CompareOp::Eq, &n(1.0), &n(1.0)), Ok(true));
    assert_eq!(compare(CompareOp::Eq, &n(1.0), &Value::from("1")), Ok(false));
    assert_eq!(
        compare(
            CompareOp::NotEq,
            &Value::list([1, 2]),
            &Value::list([1, 2])
        ),
        Ok(false)
    );
}

#[test]
fn ordering_numbers_and_strings() {
    assert_eq!(compare(CompareOp::Lt, &n(1.0), &n(2.0)), Ok(true));
    assert_eq!(compare(CompareOp::GtEq, &n(2.0), &n(2.0)), Ok(true));
    assert_eq!(
        compare(CompareOp::Gt, &Value::from("b"), &Value::from("a")),
        Ok(true)
    );
    assert_eq!(compare(CompareOp::LtEq, &n(f64::NAN), &n(1.0)), Ok(false));
}

#[test]
fn ordering_mixed_types_is_error() {
    assert!(matches!(
        compare(CompareOp::Lt, &n(1.0), &Value::from("2")),
        Err(EvalError::TypeMismatch { .. })
    ));
    assert!(compare(CompareOp::Gt, &Value::Absent, &n(1.0)).is_err());
}

#[test]
fn membership() {
    let list = Value::list(["a", "b"]);
    assert_eq!(compare(CompareOp::In, &Value::from("a"), &list), Ok(true));
    assert_eq!(compare(CompareOp::In, &Value::from("c"), &list), Ok(false));

    let map = Value::map([("cost", 1), ("7", 2)]);
    assert_eq!(compare(CompareOp::In, &Value::from("cost"), &map), Ok(true));
    assert_eq!(compare(CompareOp::In, &n(7.0), &map), Ok(true));

    assert_eq!(
        compare(CompareOp::In, &Value::from("ell"), &Value::from("hello")),
        Ok(true)
    );
    assert!(compare(CompareOp::In, &n(1.0), &n(1.0)).is_err());
}

#[test]
fn combinators() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert!(combine(Combinator::And, &t, &t));
    assert!(!combine(Combinator::And, &t, &f));
    assert!(combine(Combinator::Or, &f, &t));
    assert!(combine(Combinator::Not, &t, &f));
    assert!(!combine(Combinator::Not, &t, &t));
    assert!(!combine(Combinator::Or, &Value::Absent, &n(0.0)));
}

proptest! {
    #[test]
    fn addition_matches_f64(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        prop_assert_eq!(arith(ArithOp::Add, &n(a), &n(b)), Ok(n(a + b)));
    }

    #[test]
    fn lt_and_gteq_are_complementary(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let lt = compare(CompareOp::Lt, &n(a), &n(b)).unwrap_or(false);
        let ge = compare(CompareOp::GtEq, &n(a), &n(b)).unwrap_or(false);
        prop_assert!(lt != ge);
    }
}
