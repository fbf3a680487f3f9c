//! Whole-program tests, driven through the real lexer and parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod builtins;

use crate::{Context, Engine, EvalError, Value};

fn engine(source: &str) -> Engine {
    let tokens = rulang_lexer::lex(source).expect("lex");
    Engine::new(rulang_parse::parse(&tokens).expect("parse"))
}

fn run(source: &str, ctx: &mut Context) {
    if let Err(err) = engine(source).execute(ctx) {
        panic!("execution of {source:?} failed: {err}");
    }
}

fn run_err(source: &str, ctx: &mut Context) -> EvalError {
    match engine(source).execute(ctx) {
        Ok(()) => panic!("expected {source:?} to fail, context is {ctx:?}"),
        Err(err) => err,
    }
}

/// Run `source` against `ctx` and return the binding `name` afterwards.
fn run_get(source: &str, mut ctx: Context, name: &str) -> Value {
    run(source, &mut ctx);
    ctx.get(name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} unbound after {source:?}"))
}
