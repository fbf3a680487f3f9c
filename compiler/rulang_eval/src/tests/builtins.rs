use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::{run, run_err, run_get};
use crate::{
    buffer_handler, callback_handler, Context, DomainModel, EvalError, InMemoryModel, Value,
};

#[test]
fn max_of_nested_calls() {
    let ctx = Context::new().with_var("$cost", 102);
    assert_eq!(
        run_get("$cost = MAX(1, MAX(99, 5))", ctx, "$cost"),
        Value::from(99)
    );
}

#[test]
fn min_and_max_over_strings() {
    let mut ctx = Context::new();
    run("$lo = MIN('pear', 'apple', 'fig'); $hi = max('pear', 'apple')", &mut ctx);
    assert_eq!(ctx.get("$lo"), Some(&Value::from("apple")));
    assert_eq!(ctx.get("$hi"), Some(&Value::from("pear")));
}

#[test]
fn max_with_no_arguments_is_absent() {
    assert_eq!(run_get("$r = MAX()", Context::new(), "$r"), Value::Absent);
}

#[test]
fn unary_numeric_builtins() {
    let mut ctx = Context::new().with_var("$x", -2.5);
    run("$a = ABS($x); $c = CEIL($x); $f = Floor($x)", &mut ctx);
    assert_eq!(ctx.get("$a"), Some(&Value::from(2.5)));
    assert_eq!(ctx.get("$c"), Some(&Value::from(-2)));
    assert_eq!(ctx.get("$f"), Some(&Value::from(-3)));
}

#[test]
fn builtins_compose_with_arithmetic() {
    assert_eq!(
        run_get("$r = ABS(-4) + MIN(3, 1) * 2", Context::new(), "$r"),
        Value::from(10)
    );
}

#[test]
fn log_forwards_evaluated_values() {
    let log = buffer_handler();
    let mut ctx = Context::new()
        .with_var("$cost", 7)
        .with_log_handler(Arc::clone(&log));
    run("LOG('cost is ' + $cost)\nFOR EACH [1, 2] LOG($val)", &mut ctx);
    assert_eq!(log.output(), "cost is 7\n1\n2\n");
}

#[test]
fn log_reaches_a_host_callback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut ctx = Context::new()
        .with_var("$m", Value::map([("k", 1)]))
        .with_log_handler(callback_handler(move |value| sink.lock().push(value.clone())));
    run("LOG($m)", &mut ctx);
    assert_eq!(*seen.lock(), vec![Value::map([("k", 1)])]);
}

#[test]
fn log_in_expression_position_yields_absent() {
    let mut ctx = Context::new().with_log_handler(buffer_handler());
    run("$r = LOG(1)", &mut ctx);
    assert_eq!(ctx.get("$r"), Some(&Value::Absent));
}

#[test]
fn append_mutates_the_bound_list() {
    let ctx = Context::new().with_var("$list", Value::list([1, 2]));
    assert_eq!(
        run_get("APPEND($list, 3); APPEND($list, 'four')", ctx, "$list"),
        Value::list([Value::from(1), Value::from(2), Value::from(3), Value::from("four")])
    );
}

#[test]
fn append_inside_a_loop() {
    let ctx = Context::new().with_var("$out", Value::list::<Value>([]));
    assert_eq!(
        run_get("FOR EACH [1, 2, 3] APPEND($out, $val * 10)", ctx, "$out"),
        Value::list([10, 20, 30])
    );
}

fn model() -> InMemoryModel {
    InMemoryModel::new()
        .with_node(1, Value::map([("name", "start"), ("kind", "node")]))
        .with_link("e1", Value::map([("from", 1), ("to", 2)]))
}

#[test]
fn getnode_and_getlink_consult_the_model() {
    let mut ctx = Context::new().with_model(model());
    run(
        "$node = GETNODE(1); $n = $node.name; $link = getLink('e1'); $to = $link.to; $missing = GETNODE(42)",
        &mut ctx,
    );
    assert_eq!(ctx.get("$n"), Some(&Value::from("start")));
    assert_eq!(ctx.get("$to"), Some(&Value::from(2)));
    assert_eq!(ctx.get("$missing"), Some(&Value::Absent));
}

#[test]
fn custom_domain_model() {
    struct Doubler;

    impl DomainModel for Doubler {
        fn node(&self, id: &Value) -> Option<Value> {
            id.as_number().map(|n| Value::Number(n * 2.0))
        }

        fn link(&self, _id: &Value) -> Option<Value> {
            None
        }
    }

    let mut ctx = Context::new().with_model(Doubler);
    run("$n = GETNODE(21); $l = GETLINK(21)", &mut ctx);
    assert_eq!(ctx.get("$n"), Some(&Value::from(42)));
    assert_eq!(ctx.get("$l"), Some(&Value::Absent));
}

#[test]
fn getnode_without_model_is_a_missing_capability() {
    let mut ctx = Context::new();
    assert_eq!(
        run_err("$n = GETNODE(1)", &mut ctx),
        EvalError::MissingCapability {
            capability: "GETNODE".into()
        }
    );
}
