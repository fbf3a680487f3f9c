//! Rulang IR - shared data model for the rule language.
//!
//! - `span`: byte spans and line/column mapping
//! - `token`: tokens produced by `rulang_lexer`
//! - `ast`: syntax tree produced by `rulang_parse` and walked by `rulang_eval`

pub mod ast;
mod span;
mod token;

pub use ast::{
    ArithOp, AssignOp, BooleanGroup, Branch, Combinator, CompareOp, EachSource, Expr, ForLoop,
    FunctionCall, Identifier, IndexAccess, Literal, LoopKind, ObjectNode, ObjectProperty,
    Operation, PathStep, PropertyAccess, Reference, Sequence, Stmt,
};
pub use span::{SourceLocation, Span};
pub use token::{format_number, Token, TokenKind, TokenList};
