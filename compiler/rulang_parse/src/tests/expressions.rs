use pretty_assertions::assert_eq;
use rulang_ir::{ArithOp, Expr};

use super::rhs;

#[test]
fn literals() {
    assert_eq!(rhs("$a = 5"), Expr::number(5.0));
    assert_eq!(rhs("$a = -2.5"), Expr::number(-2.5));
    assert_eq!(rhs("$a = 'text'"), Expr::string("text"));
    assert_eq!(rhs("$a = TRUE"), Expr::boolean(true));
    assert_eq!(rhs("$a = $b"), Expr::ident("$b"));
}

#[test]
fn arithmetic_folds_left_without_precedence() {
    assert_eq!(rhs("$a = 1 + 2 * 3").to_string(), "((1 + 2) * 3)");
    assert_eq!(rhs("$a = 10 - 2 - 3").to_string(), "((10 - 2) - 3)");
    assert_eq!(rhs("$a = 8 / 2 + 1 * 4").to_string(), "(((8 / 2) + 1) * 4)");
}

#[test]
fn negative_literal_after_operand_is_subtraction() {
    assert_eq!(
        rhs("$a = 5 -3"),
        Expr::aggregate(Expr::number(5.0), ArithOp::Sub, Expr::number(3.0))
    );
    assert_eq!(rhs("$a = $b-1").to_string(), "($b - 1)");
}

#[test]
fn string_concatenation() {
    assert_eq!(
        rhs("$a = 'cost: ' + $cost + ' units'"),
        Expr::Concat(vec![
            Expr::string("cost: "),
            Expr::ident("$cost"),
            Expr::string(" units"),
        ])
    );
}

#[test]
fn concat_continues_as_aggregate() {
    assert_eq!(rhs("$a = 'x' + 1 - 2").to_string(), "(concat('x', 1) - 2)");
}

#[test]
fn reference_then_string_is_aggregate() {
    assert_eq!(rhs("$a = $b + 'x'").to_string(), "($b + 'x')");
}

#[test]
fn function_calls() {
    assert_eq!(rhs("$cost = MAX(1, MAX(99, 5))").to_string(), "MAX(1, MAX(99, 5))");
    assert_eq!(rhs("$a = floor($b / 2)").to_string(), "floor(($b / 2))");
    assert_eq!(rhs("$a = GETNODE()").to_string(), "GETNODE()");
}

#[test]
fn call_allows_trailing_comma_and_newlines() {
    assert_eq!(rhs("$a = MIN(\n  1,\n  2,\n)").to_string(), "MIN(1, 2)");
}

#[test]
fn call_result_in_arithmetic() {
    assert_eq!(rhs("$a = ABS($b) * 2").to_string(), "(ABS($b) * 2)");
}

#[test]
fn object_literal() {
    assert_eq!(
        rhs("$a = {'cost': 2.5, \"name\": 'x' + $n,}").to_string(),
        "{'cost': 2.5, 'name': concat('x', $n)}"
    );
}

#[test]
fn object_literal_across_lines() {
    assert_eq!(rhs("$a = {\n  'a': 1,\n  'b': {}\n}").to_string(), "{'a': 1, 'b': {}}");
}

#[test]
fn index_with_expression() {
    assert_eq!(rhs("$a = $list[$i + 1].cost").to_string(), "$list[($i + 1)].cost");
}

#[test]
fn comparison_in_rhs_is_reparsed_as_boolean() {
    let expr = rhs("$a = $b + 1 >= 2 * $c");
    assert_eq!(expr.to_string(), "($b + 1) >= (2 * $c)");
    assert!(matches!(expr, Expr::Comparison { .. }));
}

#[test]
fn membership_and_is() {
    assert_eq!(rhs("$a = 'x' in $list").to_string(), "'x' in $list");
    assert_eq!(rhs("$a = $b is 2").to_string(), "$b == 2");
}
