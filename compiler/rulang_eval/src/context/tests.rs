use super::*;
use crate::InMemoryModel;

#[test]
fn builder_binds_variables() {
    let ctx = Context::new().with_var("$cost", 102).with_var("$name", "edge");
    assert_eq!(ctx.get("$cost"), Some(&Value::from(102)));
    assert_eq!(ctx.get("$name"), Some(&Value::from("edge")));
    assert!(ctx.get("$missing").is_none());
}

#[test]
fn set_returns_previous_value() {
    let mut ctx = Context::new();
    assert_eq!(ctx.set("$a", 1), None);
    assert_eq!(ctx.set("$a", 2), Some(Value::from(1)));
    assert_eq!(ctx.remove("$a"), Some(Value::from(2)));
    assert!(!ctx.contains("$a"));
}

#[test]
fn loop_slot_is_separate_from_variables() {
    let mut ctx = Context::new().with_var("$val", "host");
    assert_eq!(ctx.lookup(LOOP_VALUE_NAME), None);

    ctx.replace_loop_value(Some(Value::from(3)));
    assert_eq!(ctx.lookup("$val"), Some(&Value::from(3)));
    assert_eq!(ctx.get("$val"), Some(&Value::from("host")));

    assert_eq!(ctx.replace_loop_value(None), Some(Value::from(3)));
    assert!(ctx.loop_value().is_none());
}

#[test]
fn bind_routes_loop_name_to_slot() {
    let mut ctx = Context::new();
    ctx.bind("$val", Value::from(1));
    ctx.bind("$x", Value::from(2));
    assert_eq!(ctx.loop_value(), Some(&Value::from(1)));
    assert_eq!(ctx.vars().count(), 1);
}

#[test]
fn model_is_optional() {
    assert!(Context::new().model().is_none());

    let ctx = Context::new().with_model(InMemoryModel::new().with_node(1, "n1"));
    let model = ctx.model().map(|m| m.node(&Value::from("1")));
    assert_eq!(model, Some(Some(Value::from("n1"))));
}
