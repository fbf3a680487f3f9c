use pretty_assertions::assert_eq;
use rulang_ir::{BooleanGroup, Combinator, Expr, Stmt};

use super::{parse_ok, rhs};

fn condition(source: &str) -> Expr {
    let program = parse_ok(source);
    match &program.stmts[0] {
        Stmt::Branch(branch) => branch.condition.clone(),
        other => panic!("expected branch, got {other:?}"),
    }
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(
        rhs("$toReturn = false || true && true").to_string(),
        "(false or (true and true))"
    );
    assert_eq!(
        rhs("$toReturn = true && false || true").to_string(),
        "((true and false) or true)"
    );
}

#[test]
fn same_level_is_left_associative() {
    assert_eq!(rhs("$r = a or b or c").to_string(), "((a or b) or c)");
    assert_eq!(rhs("$r = a and b and c").to_string(), "((a and b) and c)");
}

#[test]
fn not_groups_like_or() {
    assert_eq!(rhs("$r = a not b and c").to_string(), "(a not (b and c))");
    assert_eq!(rhs("$r = a or b not c").to_string(), "((a or b) not c)");
}

#[test]
fn parentheses_are_indivisible() {
    let expr = rhs("$toReturn = a && ((b || c) && d)");
    assert_eq!(expr.to_string(), "(a and ((b or c) and d))");

    let Expr::Group(outer) = expr else {
        panic!("expected group");
    };
    assert!(!outer.parenthesized);
    let Some(right) = &outer.right else {
        panic!("expected right operand");
    };
    let Expr::Group(inner) = right.as_ref() else {
        panic!("expected group");
    };
    assert!(inner.parenthesized);
    assert!(matches!(inner.left.as_ref(), Expr::Group(g) if g.parenthesized));
}

#[test]
fn parenthesized_value_is_single_group() {
    let mut expected = BooleanGroup::single(Expr::boolean(false));
    expected.parenthesized = true;
    assert_eq!(condition("IF (false) THEN $cost = 100"), Expr::Group(expected));
}

#[test]
fn comparisons_inside_combinators() {
    assert_eq!(
        condition("if $a > 1 and $b <= 'x' or $c != 3 then $d = 1").to_string(),
        "(($a > 1 and $b <= 'x') or $c != 3)"
    );
}

#[test]
fn symbolic_and_word_combinators_agree() {
    assert_eq!(rhs("$r = a && b || c"), rhs("$r = a AND b OR c"));
}

#[test]
fn group_with_combinator_variant() {
    let Expr::Group(group) = rhs("$r = $x and $y") else {
        panic!("expected group");
    };
    assert_eq!(group.combinator, Some(Combinator::And));
    assert_eq!(*group.left, Expr::ident("$x"));
}

#[test]
fn condition_with_calls() {
    assert_eq!(
        condition("if MAX($a, 2) == 2 then LOG('two')").to_string(),
        "MAX($a, 2) == 2"
    );
}
