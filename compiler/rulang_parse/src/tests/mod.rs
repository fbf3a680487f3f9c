//! Parser tests, driven through the real lexer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod boolean;
mod expressions;

use crate::{parse, ParseError};
use rulang_ir::{Expr, Sequence, Stmt};

fn parse_source(source: &str) -> Result<Sequence, ParseError> {
    let tokens = rulang_lexer::lex(source).expect("lex");
    parse(&tokens)
}

fn parse_ok(source: &str) -> Sequence {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed for {source:?}: {err} at {}", err.span),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(program) => panic!("expected parse error for {source:?}, got {program:?}"),
        Err(err) => err,
    }
}

/// Right-hand side of the single assignment in `source`.
fn rhs(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    match &program.stmts[0] {
        Stmt::Operation(op) => op.value.clone(),
        other => panic!("expected assignment, got {other:?}"),
    }
}
