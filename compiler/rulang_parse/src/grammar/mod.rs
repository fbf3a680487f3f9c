//! Grammar productions, one `impl Parser` block per area.
//!
//! - `stmt.rs`: statements, bodies, branches, loops, assignment targets
//! - `expr.rs`: value expressions, arithmetic chains, concatenation
//! - `boolean.rs`: comparison and combinator precedence climbing
//! - `literal.rs`: array literals, object literals, call arguments

mod boolean;
mod expr;
mod literal;
mod stmt;
